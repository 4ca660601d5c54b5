use tracing::info;

use super::{coordinate_tokens, SeparatorParams};

/// Locates the boundary between the upper and lower surface in a stream of
/// coordinate lines.
///
/// # Algorithm
///
/// 1. **Blank line**: the first empty or whitespace-only line at or after
///    `start` is the separator. When one exists the numeric rules never run.
/// 2. **Reversal**: among lines holding exactly two tokens with a numeric
///    first token, the first interior point whose neighbouring steps both
///    exceed the noise tolerance, change sign, and which sits at a chord edge
///    marks the turn. The separator is the line of the following point.
/// 3. **Minimum**: otherwise, if the smallest `x` is neither the first nor
///    the last point, the separator is the line of the point after it.
///
/// The separator is the first line that does not belong to the upper surface.
#[derive(Debug)]
pub struct FindSeparator<'a> {
    lines: &'a [&'a str],
    start: usize,
    params: SeparatorParams,
}

impl<'a> FindSeparator<'a> {
    /// Creates a new separator search over `lines`, beginning at `start`.
    #[must_use]
    pub fn new(lines: &'a [&'a str], start: usize, params: SeparatorParams) -> Self {
        Self {
            lines,
            start,
            params,
        }
    }

    /// Executes the search, returning the separator line index.
    ///
    /// Returns `None` when neither a blank line nor a numeric boundary can be
    /// found; this is an expected outcome, not an error.
    #[must_use]
    pub fn execute(&self) -> Option<usize> {
        if let Some(index) = self.blank_line() {
            return Some(index);
        }
        info!("no blank line separator found, attempting automatic detection");
        self.chordwise_boundary()
    }

    /// Returns the first blank line at or after `start`.
    #[must_use]
    pub fn blank_line(&self) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .skip(self.start)
            .find(|(_, line)| line.trim().is_empty())
            .map(|(i, _)| i)
    }

    /// Infers the boundary from the progression of chordwise `x` values.
    #[must_use]
    pub fn chordwise_boundary(&self) -> Option<usize> {
        let samples = self.chordwise_samples();
        if samples.len() < self.params.min_points.max(3) {
            return None;
        }

        let tol = self.params.noise_tolerance;
        for (k, w) in samples.windows(3).enumerate() {
            let x = w[1].x;
            let prev_step = x - w[0].x;
            let next_step = w[2].x - x;
            if prev_step.abs() > tol
                && next_step.abs() > tol
                && self.params.is_at_edge(x)
                && prev_step * next_step < 0.0
            {
                info!(index = k + 1, x, "separator detected at direction reversal");
                return Some(w[2].line);
            }
        }

        let (pos, min) = samples
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.x.total_cmp(&b.1.x))?;
        if pos > 0 && pos + 1 < samples.len() {
            info!(index = pos, x = min.x, "separator detected at minimum x");
            return Some(samples[pos + 1].line);
        }
        None
    }

    /// Collects `(line, x)` for every line from `start` that holds two tokens
    /// and a numeric first token.
    fn chordwise_samples(&self) -> Vec<ChordSample> {
        self.lines
            .iter()
            .enumerate()
            .skip(self.start)
            .filter_map(|(line, text)| {
                let (x, _) = coordinate_tokens(text)?;
                let x = x.parse::<f64>().ok()?;
                Some(ChordSample { line, x })
            })
            .collect()
    }
}

/// A chordwise value and the raw line it came from.
#[derive(Debug, Clone, Copy)]
struct ChordSample {
    line: usize,
    x: f64,
}
