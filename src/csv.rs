use crate::domain::*;
use crate::error::*;
use crate::signal::TimeDomain;
use std::io::prelude::*;

/// Write `t, input, output` rows, one per sample.
pub fn write_csv_1d<P: AsRef<std::path::Path>>(
    path: &P,
    time_domain: &TimeDomain,
    input: &Signal,
    output: &Signal,
) -> std::io::Result<()> {
    check_same_len(time_domain.len(), input.len())
        .and_then(|_| check_same_len(time_domain.len(), output.len()))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("Writing: {:?}", path.as_ref());
    let mut out = std::io::BufWriter::new(std::fs::File::create(path)?);
    write_rows(&mut out, time_domain, input, output)?;
    out.flush()
}

fn write_rows<W: Write>(
    out: &mut W,
    time_domain: &TimeDomain,
    input: &Signal,
    output: &Signal,
) -> std::io::Result<()> {
    writeln!(out, "t, input, output")?;
    for ((t, i), o) in time_domain.points().iter().zip(input).zip(output) {
        writeln!(out, "{t}, {i}, {o}")?;
    }
    Ok(())
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn rows() {
        let d = TimeDomain::linspace(1.0, 3).unwrap();
        let input = Signal::from(vec![1.0, 2.0, 4.0]);
        let output = Signal::from(vec![1.0, 2.25, 4.0]);
        let mut buffer = Vec::new();
        write_rows(&mut buffer, &d, &input, &output).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "t, input, output\n0, 1, 1\n0.5, 2, 2.25\n1, 4, 4\n");
    }

    #[test]
    fn file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("signal.csv");
        let d = TimeDomain::linspace(2.0, 5).unwrap();
        let s = Signal::from(vec![0.0; 5]);
        write_csv_1d(&path, &d, &s, &s).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        let d = TimeDomain::linspace(2.0, 5).unwrap();
        let s = Signal::from(vec![0.0; 4]);
        let e = write_csv_1d(&path, &d, &s, &s).unwrap_err();
        assert_eq!(e.kind(), std::io::ErrorKind::InvalidInput);
        assert!(!path.exists());
    }
}
