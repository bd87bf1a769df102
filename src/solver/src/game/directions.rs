/// Clockwise from up-right. The order decides which of several identical
/// tiles the search tries first.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 1),  // up-right
    (0, 1),   // right
    (1, 1),   // down-right
    (1, 0),   // down
    (1, -1),  // down-left
    (0, -1),  // left
    (-1, -1), // up-left
    (-1, 0),  // up
];
