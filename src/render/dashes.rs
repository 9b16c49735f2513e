//! Zerlegung einer Strecke in Striche für gestrichelte Linien.

use glam::DVec2;

/// Strecken kürzer als diese Länge werden nicht gestrichelt.
const MIN_DASHED_LENGTH: f64 = 1e-6;

/// Liefert die sichtbaren Teilstrecken von `from` nach `to`.
///
/// Beginnt mit einem Strich; der letzte Strich wird am Endpunkt abgeschnitten.
pub fn dash_segments(from: DVec2, to: DVec2, dash: f64, gap: f64) -> Vec<[DVec2; 2]> {
    let length = from.distance(to);
    if length < MIN_DASHED_LENGTH || dash <= 0.0 {
        return Vec::new();
    }
    if gap <= 0.0 {
        return vec![[from, to]];
    }

    let direction = (to - from) / length;
    let period = dash + gap;
    let count = (length / period).ceil() as usize;

    (0..count)
        .filter_map(|i| {
            let start = i as f64 * period;
            (start < length).then(|| {
                let end = (start + dash).min(length);
                [from + direction * start, from + direction * end]
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn dashes_stay_on_segment_and_clip_last() {
        let from = DVec2::new(0.0, 0.0);
        let to = DVec2::new(1.0, 0.0);

        let dashes = dash_segments(from, to, 0.3, 0.2);

        assert_eq!(dashes.len(), 2);
        assert_abs_diff_eq!(dashes[0][1].x, 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(dashes[1][0].x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(dashes[1][1].x, 0.8, epsilon = 1e-12);
    }

    #[test]
    fn final_dash_is_clipped_at_endpoint() {
        let dashes = dash_segments(DVec2::ZERO, DVec2::new(0.0, 0.9), 0.3, 0.2);

        assert_eq!(dashes.len(), 2);
        assert_abs_diff_eq!(dashes[1][1].y, 0.8, epsilon = 1e-12);

        let clipped = dash_segments(DVec2::ZERO, DVec2::new(0.0, 0.6), 0.3, 0.2);
        assert_abs_diff_eq!(clipped[1][1].y, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_segment_has_no_dashes() {
        let p = DVec2::new(0.4, 0.4);
        assert!(dash_segments(p, p, 0.1, 0.05).is_empty());
    }
}
