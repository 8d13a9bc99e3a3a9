//! Native desktop runner for textpeek-viz development.
//!
//! Run with: cargo run -p textpeek-viz --example native
//! With your own text: cargo run -p textpeek-viz --example native -- "some text"

use textpeek_core::{TextContent, WindowConfig};

const SAMPLE: &str = "textpeek development sample\n\n\
Click the checkbox below to reveal or hide this text.\n\
Line with unicode: ✓ ünïcødé 日本語\n\
A deliberately long line to exercise horizontal scrolling in the viewer, \
which never wraps its content and instead lets the scroll area grow sideways.";

fn main() {
    // Initialize tracing for native development
    #[cfg(debug_assertions)]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(
                EnvFilter::from_default_env()
                    .add_directive("textpeek_core=debug".parse().unwrap())
                    .add_directive("textpeek_viz=debug".parse().unwrap()),
            )
            .init();
    }

    let text = std::env::args().nth(1).unwrap_or_else(|| {
        (1..=60)
            .map(|i| format!("{i:>3}  filler line"))
            .fold(SAMPLE.to_string(), |acc, line| acc + "\n" + &line)
    });

    let config = WindowConfig::default()
        .with_title("textpeek - Development")
        .with_inner_size([640.0, 480.0]);

    if let Err(e) = textpeek_viz::start(TextContent::new(text), &config) {
        eprintln!("Error: {e}");
        std::process::exit(i32::from(e.exit_code()));
    }
}
