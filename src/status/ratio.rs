/// Ratio shown when nothing has been downloaded but something was uploaded
pub const MAX_RATIO: f64 = 10.0;

/// Upload/download ratio, bounded for display
///
/// Nothing transferred either way reads as 1.0; upload without download reads
/// as the cap.
pub fn share_ratio(uploaded: u64, downloaded: u64) -> f64 {
    if downloaded == 0 {
        return if uploaded == 0 { 1.0 } else { MAX_RATIO };
    }
    (uploaded as f64 / downloaded as f64).min(MAX_RATIO)
}
