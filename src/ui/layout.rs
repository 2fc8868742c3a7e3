/// Responsive breakpoints for the tile body, keyed on inner width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileDensity {
    Wide,
    Medium,
    Narrow,
}

#[must_use]
pub fn tile_density(width: u16) -> TileDensity {
    match width {
        56..=u16::MAX => TileDensity::Wide,
        34..=55 => TileDensity::Medium,
        _ => TileDensity::Narrow,
    }
}
