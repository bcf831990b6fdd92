use crate::error::Error;
use crate::error::Result;

/// Interface for drawing one index out of `faces` equally likely ones
pub trait Source {
    fn pick(&mut self, faces: usize) -> usize;
}

/// Pure transform applied to the raw roll before clamping. The shaped
/// value is always `raw + shape(raw)`, so `Offset(0)` is the identity.
#[derive(Debug, Clone, Copy)]
pub enum Shape {
    /// Add a fixed offset to the raw value
    Offset(i64),
    /// Shift the raw value by an arbitrary function of itself
    Map(fn(i64) -> i64),
}

impl Shape {
    pub fn shift(&self, raw: i64) -> i64 {
        match *self {
            Shape::Offset(n) => raw + n,
            Shape::Map(f) => raw + f(raw),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Offset(0)
    }
}

/// Recognized options for building a `Die`
#[derive(Debug, Clone)]
pub struct DieConfig {
    /// Possible results, each occurrence equally likely. Must not be empty.
    pub faces: Vec<i64>,
    pub shape: Shape,
    /// Allow the shaped result to exceed the highest face
    pub above_okay: bool,
    /// Allow the shaped result to undercut the lowest face
    pub below_okay: bool,
    pub name: Option<String>,
}

impl Default for DieConfig {
    fn default() -> Self {
        DieConfig {
            faces: (1..=6).collect(),
            shape: Shape::default(),
            above_okay: false,
            below_okay: false,
            name: None,
        }
    }
}

/// A single die and the result of rolling it
#[derive(Debug, Clone)]
pub struct Die {
    faces: Vec<i64>,
    shape: Shape,
    above_okay: bool,
    below_okay: bool,
    name: Option<String>,
    raw: Option<i64>,
}

impl Die {
    pub fn new(config: DieConfig) -> Result<Self> {
        if config.faces.is_empty() {
            return Err(Error::Dice("a die needs at least one face".to_owned()));
        }
        Ok(Die {
            faces: config.faces,
            shape: config.shape,
            above_okay: config.above_okay,
            below_okay: config.below_okay,
            name: config.name,
            raw: None,
        })
    }

    /// Standard die with faces `1..=size`
    pub fn sized(size: u64) -> Result<Self> {
        if size == 0 {
            return Err(Error::Dice("a die needs at least one face".to_owned()));
        }
        Die::new(DieConfig {
            faces: (1..=size as i64).collect(),
            name: Some(format!("d{size}")),
            ..DieConfig::default()
        })
    }

    /// Sample one face, uniformly over the sequence of faces
    pub fn roll<S: Source>(&mut self, source: &mut S) {
        let index = source.pick(self.faces.len());
        self.raw = Some(self.faces[index]);
    }

    /// Shaped and clamped value, `None` until the die has been rolled
    pub fn result(&self) -> Option<i64> {
        let raw = self.raw?;
        let shifted = self.shape.shift(raw);
        if shifted > self.high_face() && !self.above_okay {
            Some(self.high_face())
        } else if shifted < self.low_face() && !self.below_okay {
            Some(self.low_face())
        } else {
            Some(shifted)
        }
    }

    /// Unclamped rolled value, `None` until the die has been rolled
    pub fn raw(&self) -> Option<i64> {
        self.raw
    }

    pub fn faces(&self) -> &[i64] {
        &self.faces
    }

    pub fn high_face(&self) -> i64 {
        // faces is never empty, checked at construction
        *self.faces.iter().max().unwrap()
    }

    pub fn low_face(&self) -> i64 {
        *self.faces.iter().min().unwrap()
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("die")
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.result() {
            Some(result) => write!(f, "{} = {}", self.name(), result),
            None => write!(f, "{} (unrolled)", self.name()),
        }
    }
}
