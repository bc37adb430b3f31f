//! Body - the cell bookkeeping every organism shares.
//!
//! A body owns an ordered list of member cells. Members are authoritative for
//! their coordinates until [`Body::write_back`] copies them into the grid,
//! which organisms do as the last step of every update.

use std::collections::BTreeSet;

use crate::core::{Coord, Result};
use crate::domain::{Cell, CellType};
use crate::spatial::grid::{Grid, Neighborhood};

use super::template::Template;

#[derive(Debug, Clone)]
pub struct Body {
    key: String,
    anchor: Coord,
    template: Template,
    cell_type: CellType,
    members: Vec<Cell>,
}

impl Body {
    pub fn new(key: impl Into<String>, anchor: Coord, template: Template, cell_type: CellType) -> Self {
        Self {
            key: key.into(),
            anchor,
            template,
            cell_type,
            members: Vec::new(),
        }
    }

    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[inline]
    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    #[inline]
    pub fn template(&self) -> &Template {
        &self.template
    }

    #[inline]
    pub fn members(&self) -> &[Cell] {
        &self.members
    }

    #[inline]
    pub(crate) fn members_mut(&mut self) -> &mut [Cell] {
        &mut self.members
    }

    #[inline]
    pub(crate) fn set_anchor(&mut self, anchor: Coord) {
        self.anchor = anchor;
    }

    /// Replace the members with fresh cells of the body's kind, one per set
    /// template cell around the anchor, and write them into the grid.
    /// Nothing is written if any of them would fall outside the grid.
    pub fn generate_from_template(&mut self, grid: &mut Grid) -> Result<()> {
        let coords: Vec<Coord> = if self.template.is_singleton() {
            vec![self.anchor]
        } else {
            self.template
                .offsets()
                .map(|(dx, dy)| self.anchor.offset(dx, dy))
                .collect()
        };
        for &coord in &coords {
            grid.check(coord)?;
        }

        self.members = coords
            .into_iter()
            .map(|coord| Cell::create(self.cell_type, coord))
            .collect();
        self.write_back(grid)
    }

    /// Copy every member into the grid at its coordinate.
    pub fn write_back(&self, grid: &mut Grid) -> Result<()> {
        for member in &self.members {
            grid.set(member.coord(), member.clone())?;
        }
        Ok(())
    }

    /// Union of every member's neighbors. A coordinate next to several
    /// members shows up once per member.
    pub fn adjacent(&self, grid: &Grid, policy: Neighborhood) -> Result<Vec<Coord>> {
        let mut all = Vec::new();
        for member in &self.members {
            all.extend(grid.neighbors(member.coord(), policy)?);
        }
        Ok(all)
    }

    /// Deduplicated neighbors, excluding the members themselves.
    pub fn adjacent_unique(&self, grid: &Grid, policy: Neighborhood) -> Result<Vec<Coord>> {
        let unique: BTreeSet<Coord> = self
            .adjacent(grid, policy)?
            .into_iter()
            .filter(|&c| !self.owns(c))
            .collect();
        Ok(unique.into_iter().collect())
    }

    #[inline]
    pub fn owns(&self, coord: Coord) -> bool {
        self.members.iter().any(|m| m.coord() == coord)
    }

    /// Largest y over all members: the row closest to the ground.
    pub fn lowest_row(&self) -> Option<i32> {
        self.members.iter().map(|m| m.coord().y).max()
    }

    /// Add a member; a member already at that coordinate is replaced.
    pub(crate) fn place(&mut self, cell: Cell) {
        match self.members.iter_mut().find(|m| m.coord() == cell.coord()) {
            Some(slot) => *slot = cell,
            None => self.members.push(cell),
        }
    }
}
