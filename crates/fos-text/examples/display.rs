//! Example: print display order for a few mixed-direction strings

use fos_text::{display_paragraphs, TextConfig};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = TextConfig::default();
    let samples = [
        "abc \u{05D3}\u{05D2}\u{05D4} def",
        "\u{0627}\u{0644}\u{0633}\u{0644}\u{0627}\u{0645} (2024)",
        "\u{05D0}(\u{05D1}) 10%\n\u{2067}\u{05D0}\u{2069} end",
    ];

    for sample in samples {
        match display_paragraphs(sample, &config) {
            Ok(paragraphs) => {
                for paragraph in paragraphs {
                    println!(
                        "[level {}] {}",
                        paragraph.base_level.0,
                        paragraph.text.trim_end()
                    );
                }
            }
            Err(err) => eprintln!("{sample:?}: {err}"),
        }
    }
}
