//! Application - App Initialization and Window Management
//!
//! Entry point of the GPUI window mode.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::constants::{APP_NAME, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::domain::config::AppSettings;
use crate::features::dynamic_form::MountedForm;
use crate::features::dynamic_form::page::DynamicFormPage;

actions!(compose_patterns, [Quit]);

/// Open one window showing `form` and run until it is closed
pub fn run_app(form: MountedForm, settings: AppSettings) {
    Application::new().run(move |cx: &mut App| {
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let bounds = Bounds::centered(
            None,
            gpui::size(px(DEFAULT_WINDOW_WIDTH), px(DEFAULT_WINDOW_HEIGHT)),
            cx,
        );
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from(format!("{} - {APP_NAME}", form.title))),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| {
                DynamicFormPage::new(
                    form.title.clone(),
                    form.definition.clone(),
                    settings.locale,
                    settings.history_capacity,
                    cx,
                )
            })
        });
        if let Err(err) = opened {
            tracing::error!(error = %err, "failed to open window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
