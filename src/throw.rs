use crate::die::Die;
use crate::die::Source;

/// A fixed collection of dice rolled together
#[derive(Debug, Clone, Default)]
pub struct Throw {
    dice: Vec<Die>,
}

impl Throw {
    pub fn new(dice: Vec<Die>) -> Self {
        Throw { dice }
    }

    /// Roll every die. The dice are independent, order is immaterial.
    pub fn roll_all<S: Source>(&mut self, source: &mut S) {
        for die in &mut self.dice {
            die.roll(source);
        }
    }

    /// Current result of each die, in storage order
    pub fn results(&self) -> Vec<Option<i64>> {
        self.dice.iter().map(Die::result).collect()
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub(crate) fn dice_mut(&mut self) -> &mut Vec<Die> {
        &mut self.dice
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }
}
