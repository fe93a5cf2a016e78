use std::io::{self, Write};

/// Write the binary object as raw bytes, or as one line of lowercase hex.
pub fn write_artifact<W: Write>(writer: &mut W, bin_obj: &[u8], hex: bool) -> io::Result<()> {
    if hex {
        for byte in bin_obj {
            write!(writer, "{byte:02x}")?;
        }
        writeln!(writer)?;
    } else {
        writer.write_all(bin_obj)?;
    }
    writer.flush()
}
