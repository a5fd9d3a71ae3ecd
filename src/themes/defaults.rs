//! Built-in theme registry.

use super::theme::{Theme, ThemeColor};

const BUILT_IN: &[(&str, ThemeColor, &[&str])] = &[
    (
        "Halloween",
        ThemeColor::Orange,
        &["👻", "🎃", "🕷", "🕸", "🦇", "🧙", "💀", "🍬", "🌕", "⚰️"],
    ),
    (
        "Animals",
        ThemeColor::Green,
        &["🐶", "🐱", "🐭", "🐹", "🐰", "🦊", "🐻", "🐼", "🐨", "🐯", "🦁", "🐮"],
    ),
    (
        "Sports",
        ThemeColor::Blue,
        &["⚽️", "🏀", "🏈", "⚾️", "🎾", "🏐", "🏉", "🎱", "🏓", "🏸"],
    ),
    (
        "Faces",
        ThemeColor::Yellow,
        &["😀", "😂", "😍", "🤔", "😴", "😎", "🥳", "😡", "😱", "🤓"],
    ),
    (
        "Food",
        ThemeColor::Red,
        &["🍎", "🍕", "🍔", "🌮", "🍣", "🍩", "🍪", "🍉", "🥐", "🍇"],
    ),
    (
        "Vehicles",
        ThemeColor::Purple,
        &["🚗", "🚕", "🚌", "🚑", "🚒", "🚜", "🚲", "✈️", "🚀", "🚁", "⛵️", "🚂"],
    ),
];

/// Names of the built-in themes, in catalog order.
pub fn built_in_names() -> impl Iterator<Item = &'static str> {
    BUILT_IN.iter().map(|(name, _, _)| *name)
}

/// Look up a built-in theme by name.
///
/// Unknown names resolve to an empty-pool theme with that name rather than
/// failing; such a theme deals zero-card decks until it is given tokens.
pub fn theme_for(name: &str) -> Theme {
    BUILT_IN
        .iter()
        .find(|(built_in, _, _)| *built_in == name)
        .map(|(name, color, tokens)| Theme::new(*name, tokens.iter().copied(), *color))
        .unwrap_or_else(|| Theme::empty(name))
}

/// Every built-in theme, in catalog order.
pub fn default_themes() -> Vec<Theme> {
    built_in_names().map(theme_for).collect()
}
