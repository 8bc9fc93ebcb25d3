//! Named paragraph style → ATX heading prefix.

/// Closed table of heading styles. A fixed lookup keeps `HEADING_10`-style
/// names from ever matching as level 1.
const HEADING_STYLES: [(&str, u8); 6] = [
    ("HEADING_1", 1),
    ("HEADING_2", 2),
    ("HEADING_3", 3),
    ("HEADING_4", 4),
    ("HEADING_5", 5),
    ("HEADING_6", 6),
];

const HEADING_PREFIXES: [&str; 6] = ["#", "##", "###", "####", "#####", "######"];

/// Heading level (1-6) for a named style, or `None` for any other style.
pub fn heading_level(named_style_type: Option<&str>) -> Option<u8> {
    let style = named_style_type?;
    HEADING_STYLES
        .iter()
        .find(|(name, _)| *name == style)
        .map(|(_, level)| *level)
}

/// `"#"` through `"######"` for heading styles, `""` otherwise.
pub fn heading_prefix(named_style_type: Option<&str>) -> &'static str {
    match heading_level(named_style_type) {
        Some(level) => HEADING_PREFIXES[level as usize - 1],
        None => "",
    }
}
