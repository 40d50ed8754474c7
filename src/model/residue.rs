use std::fmt;

/// Identifies a residue within a structure.
///
/// The fields are opaque to the scanner. They are only compared and printed,
/// never used to infer adjacency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResidueId {
    pub chain_id: String,
    pub seq_num: i32,
    pub insertion_code: Option<char>,
}

impl ResidueId {
    pub fn new(chain_id: impl Into<String>, seq_num: i32, insertion_code: Option<char>) -> Self {
        Self {
            chain_id: chain_id.into(),
            seq_num,
            insertion_code: insertion_code.filter(|c| !c.is_whitespace()),
        }
    }
}

/// Formats as chain, number and insertion code run together (`H100A`).
impl fmt::Display for ResidueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.chain_id, self.seq_num)?;
        if let Some(code) = self.insertion_code {
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub id: ResidueId,
    pub position: [f64; 3],
}

impl Residue {
    pub fn new(id: ResidueId, position: [f64; 3]) -> Self {
        Self { id, position }
    }

    #[inline]
    pub fn distance_squared(&self, other: &Residue) -> f64 {
        distance_squared(self.position, other.position)
    }

    #[inline]
    pub fn distance(&self, other: &Residue) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

#[inline]
pub fn distance_squared(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    dx * dx + dy * dy + dz * dz
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn residue_id_display_without_insertion() {
        let id = ResidueId::new("H", 92, None);
        assert_eq!(id.to_string(), "H92");
    }

    #[test]
    fn residue_id_display_with_insertion() {
        let id = ResidueId::new("H", 100, Some('A'));
        assert_eq!(id.to_string(), "H100A");
    }

    #[test]
    fn blank_insertion_code_is_dropped() {
        let id = ResidueId::new("L", 27, Some(' '));
        assert_eq!(id.insertion_code, None);
        assert_eq!(id.to_string(), "L27");
    }

    #[test]
    fn distances_between_residues() {
        let a = Residue::new(ResidueId::new("A", 1, None), [0.0, 0.0, 0.0]);
        let b = Residue::new(ResidueId::new("A", 2, None), [1.0, 2.0, 2.0]);
        assert!(approx_eq(a.distance_squared(&b), 9.0, 1e-12));
        assert!(approx_eq(a.distance(&b), 3.0, 1e-12));
        assert!(approx_eq(b.distance(&a), 3.0, 1e-12));
    }
}
