//! Deployment complexity scoring

/// Scores for 1 through 8 total GPUs
const COMPLEXITY_TABLE: [u8; 8] = [100, 90, 82, 75, 70, 65, 62, 60];

const COMPLEXITY_FLOOR: u32 = 40;

/// Score operational complexity from the total GPU count across replicas
pub fn score_complexity(total_gpu_count: u32) -> u8 {
    let count = total_gpu_count.max(1);
    if let Some(score) = COMPLEXITY_TABLE.get(count as usize - 1) {
        return *score;
    }

    let decay = (count - 8).saturating_mul(2);
    let score = 60_u32.saturating_sub(decay).max(COMPLEXITY_FLOOR);
    u8::try_from(score).unwrap_or(u8::MAX)
}
