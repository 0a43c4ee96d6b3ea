use runewrap::{WrapConfig, WrapOptions, Wrapper};

/// Small deterministic generator so failures are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}

const WORD_RUNES: &[char] = &['a', 'b', 'x', 'Z', '9', '-', ',', 'Ḃ', 'Ϟ', '∂', '∀', '字', '🦀'];
const GAPS: &[&str] = &[" ", " ", " ", "  ", "\t", "\n", "\r\n", " \u{3000}", "\n\n", "   \t "];

fn random_text(rng: &mut Lcg, words: usize, gaps: &[&str]) -> String {
    let mut s = String::new();
    if rng.below(3) == 0 {
        s.push_str(gaps[rng.below(gaps.len())]);
    }
    for i in 0..words {
        if i > 0 {
            s.push_str(gaps[rng.below(gaps.len())]);
        }
        // mostly short words, sometimes very long ones
        let len = if rng.below(8) == 0 {
            20 + rng.below(40)
        } else {
            1 + rng.below(9)
        };
        for _ in 0..len {
            s.push(WORD_RUNES[rng.below(WORD_RUNES.len())]);
        }
    }
    if rng.below(3) == 0 {
        s.push_str(gaps[rng.below(gaps.len())]);
    }
    s
}

fn configs() -> Vec<WrapConfig> {
    let mut out = Vec::new();
    for width in [1, 2, 5, 13, 30] {
        out.push(WrapConfig::with_width(width).unwrap());
    }
    for (width, first, subsequent) in [(6, "", "   "), (10, "-- ", "  "), (8, "»»»»»»", "·"), (4, "", "∂∂∂")] {
        out.push(
            WrapOptions {
                column_width: width,
                first_row_indent: first.into(),
                subsequent_row_indent: subsequent.into(),
                ..WrapOptions::default()
            }
            .build()
            .unwrap(),
        );
    }
    out
}

fn words(s: &str) -> Vec<&str> {
    s.split_whitespace().collect()
}

#[test]
fn rows_never_exceed_the_column_width() {
    let mut rng = Lcg(7);
    for config in configs() {
        let w = Wrapper::new(config.clone());
        for _ in 0..60 {
            let n = 1 + rng.below(25);
            let text = random_text(&mut rng, n, GAPS);
            let out = w.wrap_text(&text);
            for row in out.split('\n') {
                assert!(
                    row.chars().count() <= config.column_width(),
                    "row {row:?} wider than {} for input {text:?}",
                    config.column_width()
                );
            }
        }
    }
}

#[test]
fn rows_start_with_indent_then_content() {
    let mut rng = Lcg(11);
    for config in configs() {
        let w = Wrapper::new(config.clone());
        for _ in 0..60 {
            let n = 1 + rng.below(25);
            let text = random_text(&mut rng, n, GAPS);
            let out = w.wrap_text(&text);
            for (i, row) in out.split('\n').enumerate() {
                let indent = config.indent_for(i == 0);
                let content = row
                    .strip_prefix(indent)
                    .unwrap_or_else(|| panic!("row {row:?} lacks indent {indent:?}"));
                assert!(
                    !content.starts_with(char::is_whitespace),
                    "leading whitespace in {row:?}"
                );
                assert!(
                    !content.ends_with(char::is_whitespace),
                    "trailing whitespace in {row:?}"
                );
            }
        }
    }
}

#[test]
fn wrapping_only_moves_whitespace() {
    let mut rng = Lcg(23);
    let w = Wrapper::new(WrapConfig::with_width(13).unwrap());
    for _ in 0..100 {
        let n = 1 + rng.below(25);
        let text = random_text(&mut rng, n, GAPS);
        let out = w.wrap_text(&text);
        let original: String = words(&text).concat();
        let wrapped: String = words(&out).concat();
        assert_eq!(wrapped, original);
    }
}

#[test]
fn rewrapping_single_spaced_output_is_stable() {
    let mut rng = Lcg(42);
    for width in [3, 8, 17, 30] {
        let w = Wrapper::new(WrapConfig::with_width(width).unwrap());
        for _ in 0..50 {
            let n = 1 + rng.below(30);
            let text = random_text(&mut rng, n, &[" "]);
            let once = w.wrap_text(&text);
            assert_eq!(w.wrap_text(&once), once, "width {width}, input {text:?}");
        }
    }
}

#[test]
fn hard_split_fragments_are_exact() {
    let config = WrapOptions {
        column_width: 10,
        first_row_indent: "1234".into(),
        subsequent_row_indent: "ab".into(),
        ..WrapOptions::default()
    }
    .build()
    .unwrap();
    let w = Wrapper::new(config);
    let word = "字".repeat(31);
    let out = w.wrap_text(&word);
    let rows: Vec<usize> = out.split('\n').map(|r| r.chars().count()).collect();
    // first row: 4 indent + 6; then 2 indent + 8 each; rest 31 - 6 - 24 = 1
    assert_eq!(rows, vec![10, 10, 10, 10, 3]);
}

#[test]
fn whitespace_only_input_is_empty_output() {
    let mut rng = Lcg(5);
    for config in configs() {
        let w = Wrapper::new(config);
        for _ in 0..20 {
            let mut text = String::new();
            for _ in 0..rng.below(10) {
                text.push_str(GAPS[rng.below(GAPS.len())]);
            }
            assert_eq!(w.wrap_text(&text), "");
        }
    }
}
