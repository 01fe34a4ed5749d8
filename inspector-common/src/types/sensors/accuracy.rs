/// Accuracy level the platform reports alongside a sensor stream.
///
/// Accuracy changes are part of the listener contract; the inspector
/// receives them and takes no action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accuracy {
    Unreliable,
    Low,
    Medium,
    High,
}
