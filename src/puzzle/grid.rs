//! Tile grid with an arena-style slot table and cascading slide moves
//!
//! The grid owns every tile. Slots map to tile identifiers through a fixed
//! `rows x columns` table, and each tile carries its own current slot, so
//! both directions of the mapping are kept in step on every slide without
//! rescanning. Exactly one slot is empty at all times.

use crate::io::configuration::SHUFFLE_MOVES;
use crate::io::error::{PuzzleError, Result, invalid_dimensions};
use crate::puzzle::tile::Tile;
use crate::spatial::{Point, Slot};
use image::RgbaImage;
use image::imageops::crop_imm;
use log::{debug, trace};
use ndarray::Array2;
use rand::Rng;

/// Index of a tile inside its grid
pub type TileId = usize;

/// Result of a move request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Input did not name a tile that can slide; nothing changed
    Ignored,
    /// A run of tiles slid toward the empty slot
    Moved {
        /// Number of tiles that slid, the clicked tile included
        tiles: usize,
    },
}

impl MoveOutcome {
    /// Whether any tile moved
    pub const fn moved(self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// Play area of sliding tiles cut from one image
#[derive(Debug, Clone)]
pub struct Grid {
    columns: usize,
    rows: usize,
    tile_width: u32,
    tile_height: u32,
    source: RgbaImage,
    tiles: Vec<Tile>,
    /// Tile occupying each slot, indexed `[row, column]`
    slots: Array2<Option<TileId>>,
    empty: Slot,
    /// Most recent shuffle destination first, initial empty slot last
    reverse_moves: Vec<Slot>,
}

impl Grid {
    /// Cut `image` into `columns` x `rows` tiles in solved order
    ///
    /// Tile sizes are the image size divided by the grid size with integer
    /// truncation, so a few pixels on the right and bottom edges may go
    /// unused. Slot `(0, 0)` is left empty.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `columns` or `rows` is zero, or the grid has fewer than two slots
    /// - The image is too small to give every tile at least one pixel
    pub fn new(image: &RgbaImage, columns: usize, rows: usize) -> Result<Self> {
        if columns == 0 || rows == 0 {
            return Err(invalid_dimensions(
                columns,
                rows,
                &"columns and rows must be at least 1",
            ));
        }
        let slot_count = columns
            .checked_mul(rows)
            .ok_or_else(|| invalid_dimensions(columns, rows, &"slot count overflows"))?;
        if slot_count < 2 {
            return Err(invalid_dimensions(
                columns,
                rows,
                &"a puzzle needs at least two slots",
            ));
        }

        let too_small = || PuzzleError::ImageTooSmall {
            image: image.dimensions(),
            grid: (columns, rows),
        };
        let column_count = u32::try_from(columns).ok().ok_or_else(too_small)?;
        let row_count = u32::try_from(rows).ok().ok_or_else(too_small)?;
        let tile_width = image.width() / column_count;
        let tile_height = image.height() / row_count;
        if tile_width == 0 || tile_height == 0 {
            return Err(too_small());
        }

        let mut tiles = Vec::with_capacity(slot_count - 1);
        let mut slots = Array2::from_elem((rows, columns), None);

        for row in 0..rows {
            for column in 0..columns {
                let slot = Slot::new(column, row);
                if slot == Slot::ORIGIN {
                    continue;
                }

                let bitmap = crop_imm(
                    image,
                    column as u32 * tile_width,
                    row as u32 * tile_height,
                    tile_width,
                    tile_height,
                )
                .to_image();

                if let Some(cell) = slots.get_mut([row, column]) {
                    *cell = Some(tiles.len());
                }
                tiles.push(Tile::new(
                    bitmap,
                    slot,
                    slot.top_left(tile_width, tile_height),
                ));
            }
        }

        debug!(
            "Built {columns}x{rows} grid with {tile_width}x{tile_height} tiles from {}x{} image",
            image.width(),
            image.height()
        );

        Ok(Self {
            columns,
            rows,
            tile_width,
            tile_height,
            source: image.clone(),
            tiles,
            slots,
            empty: Slot::ORIGIN,
            reverse_moves: vec![Slot::ORIGIN],
        })
    }

    /// Cut `image` into tiles and shuffle them into a solvable arrangement
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Grid::new`]
    pub fn shuffled<R: Rng + ?Sized>(
        image: &RgbaImage,
        columns: usize,
        rows: usize,
        rng: &mut R,
    ) -> Result<Self> {
        Self::shuffled_with_moves(image, columns, rows, rng, SHUFFLE_MOVES)
    }

    /// Like [`Grid::shuffled`] with an explicit number of random walk steps
    ///
    /// The shuffle happens once, on the solved grid, so
    /// [`Grid::reverse_moves`] always describes the way back from the
    /// arrangement handed to the player.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`Grid::new`]
    pub fn shuffled_with_moves<R: Rng + ?Sized>(
        image: &RgbaImage,
        columns: usize,
        rows: usize,
        rng: &mut R,
        moves: usize,
    ) -> Result<Self> {
        let mut grid = Self::new(image, columns, rows)?;
        grid.shuffle(rng, moves);
        Ok(grid)
    }

    /// Slide the tile under a grid-relative pixel toward the empty slot
    ///
    /// Coordinates outside the tiled area, including negative ones and the
    /// unused strip left by integer tile sizes, are ignored.
    pub fn move_at_pixel(&mut self, x: i32, y: i32) -> MoveOutcome {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return MoveOutcome::Ignored;
        };
        if u64::from(x) >= self.pixel_width() || u64::from(y) >= self.pixel_height() {
            trace!("Ignoring pointer outside grid at ({x}, {y})");
            return MoveOutcome::Ignored;
        }

        self.move_at_slot(
            (x / self.tile_width) as usize,
            (y / self.tile_height) as usize,
        )
    }

    /// Slide the tile in `(column, row)` and every tile between it and the
    /// empty slot one step toward the empty slot
    ///
    /// Tiles in neither the row nor the column of the empty slot cannot
    /// move, and selecting the empty slot itself does nothing.
    pub fn move_at_slot(&mut self, column: usize, row: usize) -> MoveOutcome {
        let selected = Slot::new(column, row);
        if self.tile_id_at(selected).is_none() {
            trace!("Ignoring move at {selected}: no tile there");
            return MoveOutcome::Ignored;
        }

        let empty = self.empty;
        if !selected.shares_row(empty) && !selected.shares_column(empty) {
            trace!("Ignoring move at {selected}: not aligned with empty slot {empty}");
            return MoveOutcome::Ignored;
        }

        // Nearest neighbour of the empty slot goes first so every slide lands
        // in the slot vacated by the previous one
        let mut moved = 0;
        let mut source = empty;
        while let Some(next) = source.step_toward(selected) {
            if self.slide_to_empty(next) {
                moved += 1;
            }
            source = next;
        }

        debug_assert!(self.is_consistent());
        MoveOutcome::Moved { tiles: moved }
    }

    /// Advance every tile's animation by `elapsed_ms` milliseconds
    pub fn update(&mut self, elapsed_ms: u32) {
        for tile in &mut self.tiles {
            tile.update(elapsed_ms);
        }
    }

    /// Whether every tile is back in the slot it was cut from
    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(Tile::is_in_original_slot)
    }

    /// Whether every tile has finished animating
    pub fn is_not_moving(&self) -> bool {
        !self.tiles.iter().any(Tile::is_moving)
    }

    /// Copy of the recorded shuffle-undo sequence
    ///
    /// Index 0 is the empty slot left by the last shuffle step and the final
    /// entry is the initial empty slot `(0, 0)`. Selecting the entries from
    /// index 1 onward with [`Grid::move_at_slot`] restores the solved state.
    /// Player moves do not touch the record, so it only applies to the
    /// arrangement the shuffle left behind.
    pub fn reverse_moves(&self) -> Vec<Slot> {
        self.reverse_moves.clone()
    }

    /// Animated single slide of the tile at `from` into the empty slot
    fn slide_to_empty(&mut self, from: Slot) -> bool {
        let destination = self.empty;
        let position = destination.top_left(self.tile_width, self.tile_height);
        let Some(id) = self.tile_id_at(from) else {
            return false;
        };
        let Some(tile) = self.tiles.get_mut(id) else {
            return false;
        };
        tile.move_to(position, destination);
        self.relocate(id, from, destination);
        true
    }

    /// Single slide of the tile at `from` into the empty slot, without animation
    pub(super) fn slide_to_empty_instantly(&mut self, from: Slot) -> bool {
        let destination = self.empty;
        let position = destination.top_left(self.tile_width, self.tile_height);
        let Some(id) = self.tile_id_at(from) else {
            return false;
        };
        let Some(tile) = self.tiles.get_mut(id) else {
            return false;
        };
        tile.move_instantly(position, destination);
        self.relocate(id, from, destination);
        true
    }

    // Swaps the slot table entries after a tile changed slot
    fn relocate(&mut self, id: TileId, from: Slot, to: Slot) {
        if let Some(cell) = self.slots.get_mut([from.row, from.column]) {
            *cell = None;
        }
        if let Some(cell) = self.slots.get_mut([to.row, to.column]) {
            *cell = Some(id);
        }
        self.empty = from;
        trace!("Tile {id} slid {from} -> {to}");
    }

    pub(super) fn push_reverse_move(&mut self, slot: Slot) {
        self.reverse_moves.insert(0, slot);
    }

    pub(super) fn reset_reverse_moves(&mut self) {
        self.reverse_moves.clear();
        self.reverse_moves.push(Slot::ORIGIN);
    }

    /// Verify the slot table, tile slots and empty slot agree
    ///
    /// True when exactly one slot is empty, it is the tracked empty slot,
    /// and every tile's current slot holds that tile.
    pub fn is_consistent(&self) -> bool {
        let empty_count = self.slots.iter().filter(|cell| cell.is_none()).count();
        let empty_tracked = self.tile_id_at(self.empty).is_none()
            && self.empty.is_within(self.columns, self.rows);
        let tiles_placed = self.tiles.iter().enumerate().all(|(id, tile)| {
            tile.current_slot().is_within(self.columns, self.rows)
                && self.tile_id_at(tile.current_slot()) == Some(id)
        });

        empty_count == 1 && empty_tracked && tiles_placed
    }

    fn tile_id_at(&self, slot: Slot) -> Option<TileId> {
        self.slots.get([slot.row, slot.column]).copied().flatten()
    }

    /// Tile currently occupying `slot`, if any
    pub fn tile_at(&self, slot: Slot) -> Option<&Tile> {
        self.tile_id_at(slot).and_then(|id| self.tiles.get(id))
    }

    /// All tiles in construction order, for rendering
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Number of tiles, one less than the number of slots
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// The slot without a tile
    pub const fn empty_slot(&self) -> Slot {
        self.empty
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Width of one tile in pixels
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Height of one tile in pixels
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Width of the tiled area in pixels
    pub const fn pixel_width(&self) -> u64 {
        self.columns as u64 * self.tile_width as u64
    }

    /// Height of the tiled area in pixels
    pub const fn pixel_height(&self) -> u64 {
        self.rows as u64 * self.tile_height as u64
    }

    /// The full image the tiles were cut from
    pub const fn source_image(&self) -> &RgbaImage {
        &self.source
    }

    /// Drawing position of the empty slot's top-left corner
    pub fn empty_position(&self) -> Point {
        self.empty.top_left(self.tile_width, self.tile_height)
    }
}
