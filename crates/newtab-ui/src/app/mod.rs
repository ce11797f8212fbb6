use crate::core::logging::ConsoleMakeWriter;
use crate::features::shortcuts::editor_view::ShortcutEditor;
use crate::features::shortcuts::view::ShortcutGrid;
use gloo::console;
use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use yew::prelude::*;

#[function_component(NewTabApp)]
pub(crate) fn new_tab_app() -> Html {
    html! {
        <main class="newtab">
            <ShortcutGrid />
            <ShortcutEditor />
        </main>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    init_logging();
    yew::Renderer::<NewTabApp>::new().render();
}

fn init_logging() {
    let installed = tracing_subscriber::fmt()
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .with_writer(ConsoleMakeWriter::new(console_sink))
        .try_init();
    if let Err(err) = installed {
        console::error!("failed to install tracing subscriber", err.to_string());
    }
}

fn console_sink(level: Level, line: &str) {
    if level == Level::ERROR {
        console::error!(line);
    } else if level == Level::WARN {
        console::warn!(line);
    } else if level == Level::INFO {
        console::info!(line);
    } else {
        console::debug!(line);
    }
}
