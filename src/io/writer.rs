use std::fmt::Display;
use std::fs;
use std::path::Path;

use crate::xy::xy::XY;

/// Metadata as sorted `key\tvalue` lines, then one `x\ty` line per sample
/// with six decimals.
impl Display for XY {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut header: Vec<String> = self
            .meta()
            .iter()
            .map(|(key, value)| format!("{}\t{}\n", key, value))
            .collect();
        header.sort();
        for line in &header {
            f.write_str(line)?;
        }
        for p in self.points() {
            writeln!(f, "{:.6}\t{:.6}", p.x(), p.y())?;
        }
        Ok(())
    }
}

impl XY {
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        fs::write(path, self.to_string())
    }
}
