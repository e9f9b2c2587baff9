use crate::error::SceneError;
use glam::Vec3;

/// Convert a packed 0xRRGGBB color to linear-ish [0, 1] floats.
#[inline]
pub fn hex_to_rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Parse the `#rrggbb` string produced by an `<input type="color">`.
pub fn parse_hex_color(s: &str) -> Result<u32, SceneError> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix('#')
        .or_else(|| trimmed.strip_prefix("0x"))
        .unwrap_or(trimmed);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(SceneError::InvalidColor(s.to_string()));
    }
    u32::from_str_radix(digits, 16).map_err(|_| SceneError::InvalidColor(s.to_string()))
}

#[inline]
pub fn format_hex_color(hex: u32) -> String {
    format!("#{:06x}", hex & 0x00ff_ffff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_picker_output() {
        assert_eq!(parse_hex_color("#ff6b6b"), Ok(0xff6b6b));
        assert_eq!(parse_hex_color("0x667EEA"), Ok(0x667eea));
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("#gg0000").is_err());
    }

    #[test]
    fn format_pads_to_six_digits() {
        assert_eq!(format_hex_color(0x00ff), "#0000ff");
        assert_eq!(format_hex_color(0x764ba2), "#764ba2");
    }

    #[test]
    fn hex_channels_split() {
        let c = hex_to_rgb(0xff0000);
        assert_eq!(c, Vec3::new(1.0, 0.0, 0.0));
    }
}
