use rand::seq::SliceRandom;
use rand::Rng;

pub const OPTION_COUNT: usize = 4;
const DISTRACTOR_SPREAD: u32 = 10;

/// Draws distinct distractors around `answer` and shuffles them together with it.
///
/// Returns the options and the index where `answer` ended up. Candidates come from
/// `[answer - 10, answer + 10]` clamped at zero, which always holds at least
/// eleven values, so the draw loop terminates.
pub fn build_options<R: Rng + ?Sized>(answer: u32, rng: &mut R) -> ([u32; OPTION_COUNT], usize) {
    let low = answer.saturating_sub(DISTRACTOR_SPREAD);
    let high = answer + DISTRACTOR_SPREAD;

    let mut options = vec![answer];
    while options.len() < OPTION_COUNT {
        let candidate = rng.gen_range(low, high + 1);
        if !options.contains(&candidate) {
            options.push(candidate);
        }
    }
    options.shuffle(rng);

    let correct_index = options.iter().position(|o| *o == answer).unwrap_or(0);
    let mut shuffled = [0; OPTION_COUNT];
    shuffled.copy_from_slice(&options);
    (shuffled, correct_index)
}
