use stellarforge_core::block::Block;

/// Factor applied to the drone price after each purchase.
const DRONE_COST_ESCALATION: f32 = 1.2;

/// Resource balances and passive energy income. All debits are
/// checked: a failed debit changes nothing and returns false, and the
/// caller decides how to back out.
#[derive(Debug, Clone)]
pub struct Ledger {
    matter: u32,
    rare_matter: u32,
    energy: f64,
    energy_rate: f64,
    prestige_level: u32,
    next_drone_cost: f32,
}

impl Ledger {
    pub fn new(base_drone_cost: f32) -> Self {
        Self {
            matter: 0,
            rare_matter: 0,
            energy: 0.0,
            energy_rate: 0.0,
            prestige_level: 0,
            next_drone_cost: base_drone_cost,
        }
    }

    pub fn matter(&self) -> u32 {
        self.matter
    }

    pub fn rare_matter(&self) -> u32 {
        self.rare_matter
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn energy_rate(&self) -> f64 {
        self.energy_rate
    }

    pub fn prestige_level(&self) -> u32 {
        self.prestige_level
    }

    /// Price of the next drone, rounded to whole matter.
    pub fn drone_cost(&self) -> u32 {
        self.next_drone_cost.round() as u32
    }

    pub fn add_matter(&mut self, amount: u32) {
        self.matter += amount;
    }

    pub fn add_rare_matter(&mut self, amount: u32) {
        self.rare_matter += amount;
    }

    pub fn consume_matter(&mut self, amount: u32) -> bool {
        if self.matter < amount {
            return false;
        }
        self.matter -= amount;
        true
    }

    pub fn consume_rare_matter(&mut self, amount: u32) -> bool {
        if self.rare_matter < amount {
            return false;
        }
        self.rare_matter -= amount;
        true
    }

    pub fn add_energy(&mut self, amount: f64) {
        self.energy += amount;
    }

    /// Set passive income to an absolute rate.
    pub fn set_energy_rate(&mut self, rate: f64) {
        self.energy_rate = rate;
    }

    /// Bump passive income, e.g. when a panel or shell comes online.
    pub fn raise_energy_rate(&mut self, delta: f64) {
        self.set_energy_rate(self.energy_rate + delta);
    }

    pub fn set_prestige_level(&mut self, level: u32) {
        self.prestige_level = level;
    }

    /// Pay for a drone at the current price and escalate the price.
    pub fn buy_drone(&mut self) -> bool {
        if !self.consume_matter(self.drone_cost()) {
            return false;
        }
        self.next_drone_cost *= DRONE_COST_ESCALATION;
        true
    }

    /// Convert a delivered block into resources. Core yields double
    /// matter, rare ore yields rare matter, everything else is one
    /// matter.
    pub fn credit_delivery(&mut self, carried: Block) {
        match carried {
            Block::AsteroidCore => self.matter += 2,
            Block::RareOre => self.rare_matter += 1,
            _ => self.matter += 1,
        }
    }
}
