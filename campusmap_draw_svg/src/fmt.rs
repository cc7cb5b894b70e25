// Copyright 2025 the Campusmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Formats a scalar compactly: integers without a fraction, others with at
/// most three decimals.
pub(crate) fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let rounded = v.round();
    if (rounded - v).abs() < 1e-6 && rounded.abs() < 1e15 {
        // Avoid "-0".
        return format!("{}", rounded + 0.0);
    }
    let mut s = format!("{v:.3}");
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

/// Splits a color into an SVG hex triplet and its alpha in `0..=1`.
pub(crate) fn color(color: Color) -> (String, f64) {
    let rgba = color.to_rgba8();
    let a = f64::from(rgba.a) / 255.0;
    (format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b), a)
}

/// Escapes text for use inside a double-quoted attribute or element body.
pub(crate) fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use super::{color, escape, num};

    #[test]
    fn num_is_compact() {
        assert_eq!(num(10.0), "10");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(0.25), "0.25");
        assert_eq!(num(1.0 / 3.0), "0.333");
        assert_eq!(num(f64::NAN), "0");
    }

    #[test]
    fn color_splits_alpha() {
        let (hex, a) = color(Color::from_rgba8(0x4c, 0xaf, 0x50, 255));
        assert_eq!(hex, "#4caf50");
        assert!((a - 1.0).abs() < 1e-9);
    }

    #[test]
    fn escape_attribute_specials() {
        assert_eq!(escape("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }
}
