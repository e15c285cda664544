//! Digital input the sensor is wired to.

/// A digital line reporting its raw level.
///
/// Implement this over the HAL pin of the target. The detector owns the line
/// exclusively and switches it to input mode once, before the first read.
pub trait InputLine {
    fn configure_input(&mut self);

    fn is_high(&mut self) -> bool;
}
