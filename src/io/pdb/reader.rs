use crate::io::error::Error;
use crate::model::residue::{Residue, ResidueId};
use crate::model::structure::{Chain, Structure};
use bio_forge as bf;
use std::io::{BufRead, Cursor};

const REPRESENTATIVE_ATOM: &str = "CA";

/// Reads a PDB file into chains of single-atom residues.
///
/// Parsing is done by `bio_forge`; this reader keeps the first model, the
/// standard (polymer) residues, and of each residue the first `CA` atom. Bytes
/// that are not valid UTF-8 are replaced before parsing, so a stray Latin-1
/// character in a `REMARK` does not cost the whole structure.
pub struct StructureReader<R> {
    reader: R,
    id: String,
}

impl<R: BufRead> StructureReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            id: String::new(),
        }
    }

    /// Identifier attached to the resulting structure and its match records.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn read(self) -> Result<Structure, Error> {
        let text = first_model_text(self.reader)?;

        let bio_context = bf::io::IoContext::new_default();
        let bio_struct = bf::io::read_pdb_structure(Cursor::new(text), &bio_context)?;

        let mut structure = Structure::new(self.id);
        structure.chains = bio_struct
            .iter_chains()
            .filter_map(representative_chain)
            .collect();
        Ok(structure)
    }
}

/// Decodes the input line by line up to the end of the first model.
fn first_model_text<R: BufRead>(mut reader: R) -> Result<String, Error> {
    let mut text = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.starts_with(b"ENDMDL") {
            break;
        }
        if line.starts_with(b"MODEL") {
            continue;
        }
        text.push_str(&String::from_utf8_lossy(&line));
        if !text.ends_with('\n') {
            text.push('\n');
        }
    }

    Ok(text)
}

fn representative_chain(chain: &bf::Chain) -> Option<Chain> {
    let residues: Vec<Residue> = chain
        .iter_residues()
        .filter(|residue| matches!(residue.category, bf::ResidueCategory::Standard))
        .filter_map(|residue| {
            let atom = residue
                .iter_atoms()
                .find(|atom| atom.name == REPRESENTATIVE_ATOM)?;
            Some(Residue::new(
                ResidueId::new(chain.id.as_str(), residue.id, residue.insertion_code),
                [atom.pos.x, atom.pos.y, atom.pos.z],
            ))
        })
        .collect();

    if residues.is_empty() {
        None
    } else {
        Some(Chain::new(chain.id.as_str(), residues))
    }
}
