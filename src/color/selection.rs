//! Dominant color selection
//!
//! Picks the "most colorful" entry out of a ranked palette:
//! - The first pure white entry is dropped
//! - The first remaining entry seeds the candidate
//! - Any later entry with a strictly larger channel sum replaces it
//!
//! Ties therefore resolve to the earliest entry.

use super::Rgb;

/// Select the most colorful entry of a ranked palette
///
/// # Arguments
///
/// * `palette` - Ranked colors as returned by an extractor
///
/// # Returns
///
/// The chosen color, or `None` when nothing is left once white is removed
pub fn select_most_colorful(mut palette: Vec<Rgb>) -> Option<Rgb> {
    if let Some(white_index) = palette.iter().position(Rgb::is_white) {
        tracing::trace!(index = white_index, "dropping white from palette");
        palette.remove(white_index);
    }

    let (&seed, rest) = palette.split_first()?;
    let mut most_colorful = seed;
    let mut max_sum = seed.channel_sum();

    for color in rest {
        let sum = color.channel_sum();
        if sum > max_sum {
            most_colorful = *color;
            max_sum = sum;
        }
    }

    Some(most_colorful)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(colors: &[[u8; 3]]) -> Vec<Rgb> {
        colors.iter().copied().map(Rgb::from).collect()
    }

    #[test]
    fn test_picks_largest_channel_sum() {
        let chosen = select_most_colorful(palette(&[[10, 10, 10], [0, 90, 200], [100, 100, 0]]));
        assert_eq!(chosen, Some(Rgb::new(0, 90, 200)));
    }

    #[test]
    fn test_white_excluded_even_as_seed() {
        let chosen = select_most_colorful(palette(&[[255, 255, 255], [10, 200, 10], [250, 0, 0]]));
        assert_eq!(chosen, Some(Rgb::new(250, 0, 0)));
    }

    #[test]
    fn test_white_excluded_from_middle() {
        let chosen = select_most_colorful(palette(&[[20, 20, 20], [255, 255, 255], [30, 30, 30]]));
        assert_eq!(chosen, Some(Rgb::new(30, 30, 30)));
    }

    #[test]
    fn test_tie_keeps_earliest() {
        let chosen = select_most_colorful(palette(&[[0, 0, 0], [100, 50, 0], [50, 100, 0], [0, 0, 150]]));
        assert_eq!(chosen, Some(Rgb::new(100, 50, 0)));
    }

    #[test]
    fn test_seed_wins_when_largest() {
        let chosen = select_most_colorful(palette(&[[200, 200, 200], [100, 100, 100]]));
        assert_eq!(chosen, Some(Rgb::new(200, 200, 200)));
    }

    #[test]
    fn test_near_white_is_a_candidate() {
        let chosen = select_most_colorful(palette(&[[40, 40, 40], [254, 255, 255]]));
        assert_eq!(chosen, Some(Rgb::new(254, 255, 255)));
    }

    #[test]
    fn test_only_first_white_removed() {
        // A second white entry survives the single forward-scan removal
        let chosen = select_most_colorful(palette(&[[255, 255, 255], [10, 10, 10], [255, 255, 255]]));
        assert_eq!(chosen, Some(Rgb::WHITE));
    }

    #[test]
    fn test_empty_palettes() {
        assert_eq!(select_most_colorful(Vec::new()), None);
        assert_eq!(select_most_colorful(vec![Rgb::WHITE]), None);
    }
}
