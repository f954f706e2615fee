use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::slide::Testimonial;

#[derive(Debug, Deserialize)]
struct DeckFile {
    #[serde(rename = "testimonial")]
    testimonials: Vec<Testimonial>,
}

/// Load a deck of testimonials from a TOML file with `[[testimonial]]`
/// tables. Deck order is file order and is fixed for the lifetime of the
/// process. An empty deck is rejected here so the controller can assume a
/// non-empty slide list.
pub fn load_deck(path: &Path) -> Result<Vec<Testimonial>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file {}", path.display()))?;
    let deck: DeckFile = toml::from_str(&raw)
        .with_context(|| format!("failed to parse deck file {}", path.display()))?;
    if deck.testimonials.is_empty() {
        bail!("no testimonials found in {}", path.display());
    }
    Ok(deck.testimonials)
}

/// Built-in deck used when no file is given on the command line.
pub fn demo_deck() -> Vec<Testimonial> {
    vec![
        Testimonial {
            author: "Sarah Chen".into(),
            role: "Head of Product, Brightline".into(),
            quote: "We shipped our redesign two weeks early. The whole team \
                    lives in this tool now."
                .into(),
        },
        Testimonial {
            author: "Marcus Webb".into(),
            role: "Founder, Fieldnote".into(),
            quote: "Setup took minutes, not days. I keep waiting for the \
                    catch and there isn't one."
                .into(),
        },
        Testimonial {
            author: "Priya Natarajan".into(),
            role: "Engineering Lead, Loopwire".into(),
            quote: "The first product in years that my team adopted without \
                    me asking them to."
                .into(),
        },
        Testimonial {
            author: "Tomás Rivera".into(),
            role: "Operations Director, Kestrel & Co".into(),
            quote: "Support answered on a Sunday. That alone sold me; the \
                    product kept me."
                .into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_testimonials_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[testimonial]]
author = "Ada"
role = "CTO"
quote = "Brilliant."

[[testimonial]]
author = "Grace"
role = "Admiral"
quote = "Ship it."
"#
        )
        .unwrap();

        let deck = load_deck(file.path()).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck[0].author, "Ada");
        assert_eq!(deck[1].author, "Grace");
    }

    #[test]
    fn empty_deck_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "testimonial = []").unwrap();
        let err = load_deck(file.path()).unwrap_err();
        assert!(err.to_string().contains("no testimonials"));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_deck(Path::new("/nonexistent/deck.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/deck.toml"));
    }

    #[test]
    fn demo_deck_is_usable() {
        assert!(!demo_deck().is_empty());
    }
}
