/// An arrow key the host forwards while focus is inside the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArrowKey {
    Left,
    Right,
}
