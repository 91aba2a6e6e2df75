/// Number of cells along the x axis of a maze grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Width(pub usize);

/// Number of cells along the y axis of a maze grid.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Height(pub usize);
