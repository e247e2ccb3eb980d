//! PathShape Editor.
//!
//! Headless-Lauf des Editor-Kerns: spielt eine Zeichen-Sitzung als
//! Intent-Folge ab und protokolliert die entstandene Render-Szene.
//! Ein Frontend liefert dieselben Intents aus echten Zeiger-Events.

use glam::Vec2;
use path_shape_editor::{
    AppController, AppIntent, AppState, EditContext, EditorOptions, PointerButton, ShapeStyle,
};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "PathShape Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let mut state = AppState::new();
        state.options = EditorOptions::load_from_file(&config_path);

        let mut controller = AppController::new();
        for intent in demo_session() {
            if let Err(e) = controller.handle_intent(&mut state, intent) {
                log::error!("Event handling failed: {:#}", e);
            }
        }

        let scene = controller.build_render_scene(&state);
        for shape in &scene.shapes {
            log::info!(
                "Form {:?}: {} Anker, geschlossen={}, selektiert={}, {} Füll-Vierecke",
                shape.id,
                shape.anchors.len(),
                shape.closed,
                shape.selected,
                shape.fill.len()
            );
        }
        log::info!(
            "{} Formen, {} Segmente, {} Commands ausgeführt",
            state.object_count(),
            state.segment_count(),
            state.command_log.len()
        );
        Ok(())
    }
}

/// Dreieck zeichnen und schließen, dann im Objekt-Kontext per Gummiband
/// selektieren und duplizieren.
fn demo_session() -> Vec<AppIntent> {
    let mut intents = Vec::new();
    for pos in [
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(150.0, 200.0),
        Vec2::new(100.0, 100.0),
    ] {
        intents.extend(click(pos));
    }
    intents.push(AppIntent::EditContextSelected {
        context: EditContext::Object,
    });
    intents.extend(drag(Vec2::new(50.0, 50.0), Vec2::new(250.0, 250.0)));
    intents.push(AppIntent::ColorsChanged {
        style: ShapeStyle {
            fill_color: [0.2, 0.6, 0.9, 1.0],
            ..ShapeStyle::default()
        },
    });
    intents.push(AppIntent::DuplicateSelectedRequested);
    intents
}

fn click(pos: Vec2) -> [AppIntent; 3] {
    [
        AppIntent::PointerMoved { pos },
        AppIntent::PointerPressed {
            pos,
            button: PointerButton::Primary,
        },
        AppIntent::PointerReleased {
            pos,
            button: PointerButton::Primary,
        },
    ]
}

fn drag(from: Vec2, to: Vec2) -> [AppIntent; 4] {
    [
        AppIntent::PointerMoved { pos: from },
        AppIntent::PointerPressed {
            pos: from,
            button: PointerButton::Primary,
        },
        AppIntent::PointerDragged {
            pos: to,
            button: PointerButton::Primary,
        },
        AppIntent::PointerReleased {
            pos: to,
            button: PointerButton::Primary,
        },
    ]
}
