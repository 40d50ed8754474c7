use super::residue::Residue;

/// An ordered run of residues sharing one chain label.
///
/// Boundaries are decided by whoever builds the chain; the scanner never
/// splits or joins chains on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    pub id: String,
    pub residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: impl Into<String>, residues: Vec<Residue>) -> Self {
        Self {
            id: id.into(),
            residues,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    pub id: String,
    pub chains: Vec<Chain>,
}

impl Structure {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            chains: Vec::new(),
        }
    }

    #[inline]
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn residue_count(&self) -> usize {
        self.chains.iter().map(Chain::len).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chains.iter().all(Chain::is_empty)
    }
}
