use crate::bits::bit;

pub const SPRITE_SIZE: usize = 5;
// Columns 0..HALF_WIDTH are read from the digest, the rest are mirrored
const HALF_WIDTH: usize = 3;

pub const PRIMARY_PATTERN_BIT: isize = 0;
pub const SECONDARY_PATTERN_BIT: isize = 15;
/// Number of digest bits consumed by both layers
pub const PATTERN_BITS: isize = 30;

pub type Grid = [[bool; SPRITE_SIZE]; SPRITE_SIZE];

/// Two-layer 5x5 pixel pattern, horizontally symmetric
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stencil {
    pub primary: Grid,
    pub secondary: Grid,
}

fn generate_grid(digest: &[u8], first_bit: isize) -> Grid {
    let mut grid = [[false; SPRITE_SIZE]; SPRITE_SIZE];
    let mut bit_index = first_bit;
    for row in grid.iter_mut() {
        for col in 0..HALF_WIDTH {
            let paint = bit(digest, bit_index);
            bit_index += 1;
            row[col] = paint;
            row[SPRITE_SIZE - 1 - col] = paint;
        };
    };
    grid
}

impl Stencil {
    pub fn from_digest(digest: &[u8]) -> Self {
        Self {
            primary: generate_grid(digest, PRIMARY_PATTERN_BIT),
            secondary: generate_grid(digest, SECONDARY_PATTERN_BIT),
        }
    }

    pub fn is_symmetric(&self) -> bool {
        [&self.primary, &self.secondary].iter().all(|grid| {
            grid.iter().all(|row| {
                (0..SPRITE_SIZE).all(|col| row[col] == row[SPRITE_SIZE - 1 - col])
            })
        })
    }
}
