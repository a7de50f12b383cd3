use std::fs;
use std::path::Path;

/// Wraps the bodies in brackets, comma separated. Bodies are not escaped or
/// validated, so the result is only valid JSON if every body is.
pub fn join_bodies(bodies: &[Vec<u8>]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bodies.iter().map(|b| b.len() + 1).sum::<usize>() + 2);
    out.push(b'[');
    out.extend_from_slice(&bodies.join(&b","[..]));
    out.push(b']');
    return out;
}

/// Writes the joined output. A failed write is logged and otherwise ignored.
pub fn write_output(path: &Path, data: &[u8]) {
    match fs::write(path, data) {
        Ok(()) => tracing::debug!("wrote {} bytes to {}", data.len(), path.display()),
        Err(e) => tracing::warn!("could not write output file {}: {}", path.display(), e),
    }
}
