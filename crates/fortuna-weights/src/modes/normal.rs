/// Normal mode: the base weight, untouched. A zero base weight stays zero,
/// so that item can never be drawn.
pub fn calculate(base_weight: f64) -> f64 {
    base_weight
}
