use crate::core::data::colour::Colour;
use crate::core::puzzle::moves::Peg;
use glam::Vec3;

const DISK_COLOURS: [Colour; 6] = [
    Colour::from_hex(0xFF6B6B),
    Colour::from_hex(0x4ECDC4),
    Colour::from_hex(0x45B7D1),
    Colour::from_hex(0x96CEB4),
    Colour::from_hex(0xFFA07A),
    Colour::from_hex(0xDDA0DD),
];

/// Geometry of the three-peg puzzle, relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TowerLayout {
    pub anchor: Vec3,
    pub peg_spacing: f32,
    /// Height of the centre of the bottom disk.
    pub floor_y: f32,
    pub disk_thickness: f32,
    /// Height disks are carried at between pegs.
    pub carry_y: f32,
    pub min_radius: f32,
    pub radius_step: f32,
    pub base_thickness: f32,
    pub pole_height: f32,
    pub base_colour: Colour,
    pub pole_colour: Colour,
}

impl Default for TowerLayout {
    fn default() -> Self {
        Self {
            anchor: Vec3::ZERO,
            peg_spacing: 2.5,
            floor_y: 0.175,
            disk_thickness: 0.2,
            carry_y: 3.0,
            min_radius: 0.25,
            radius_step: 0.12,
            base_thickness: 0.15,
            pole_height: 2.5,
            base_colour: Colour::from_hex(0x8B4513),
            pole_colour: Colour::from_hex(0x654321),
        }
    }
}

impl TowerLayout {
    #[must_use]
    pub fn at(anchor: Vec3) -> Self {
        Self {
            anchor,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn peg_x(&self, peg: Peg) -> f32 {
        (peg.index() as f32 - 1.0) * self.peg_spacing
    }

    /// Resting centre of a disk sitting at `level` (0 = bottom) on `peg`.
    #[must_use]
    pub fn rest_position(&self, peg: Peg, level: usize) -> Vec3 {
        let y = self.floor_y + level as f32 * self.disk_thickness;

        self.anchor + Vec3::new(self.peg_x(peg), y, 0.0)
    }

    #[must_use]
    pub fn carry_position(&self, peg: Peg) -> Vec3 {
        self.anchor + Vec3::new(self.peg_x(peg), self.carry_y, 0.0)
    }

    /// Disk 0 is the largest of `disk_count`.
    #[must_use]
    pub fn disk_radius(&self, disk: usize, disk_count: usize) -> f32 {
        self.min_radius + disk_count.saturating_sub(disk) as f32 * self.radius_step
    }

    #[must_use]
    pub fn disk_colour(&self, disk: usize) -> Colour {
        DISK_COLOURS[disk % DISK_COLOURS.len()]
    }

    #[must_use]
    pub fn base_position(&self, peg: Peg) -> Vec3 {
        let y = self.floor_top() - self.base_thickness / 2.0;

        self.anchor + Vec3::new(self.peg_x(peg), y, 0.0)
    }

    #[must_use]
    pub fn pole_position(&self, peg: Peg) -> Vec3 {
        let y = self.floor_top() + self.pole_height / 2.0;

        self.anchor + Vec3::new(self.peg_x(peg), y, 0.0)
    }

    fn floor_top(&self) -> f32 {
        self.floor_y - self.disk_thickness / 2.0
    }
}
