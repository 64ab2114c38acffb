use csv::Writer;
use std::fs::File;
use std::io;

/// write rows into a csv file, the first column is the argument `arg` taken from `x_mesh`
pub fn save_rows_to_csv(
    rows: &[Vec<f64>],
    headers: &[String],
    filename: &str,
    x_mesh: &[f64],
    arg: &str,
) -> io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    let mut headers_with_x = vec![arg.to_string()];
    headers_with_x.extend(headers.iter().cloned());
    writer.write_record(&headers_with_x)?;

    for (x, row) in x_mesh.iter().zip(rows.iter()) {
        let mut row_data = vec![x.to_string()];
        row_data.extend(row.iter().map(|val| val.to_string()));
        writer.write_record(&row_data)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> (Vec<Vec<f64>>, Vec<String>, Vec<f64>) {
        let rows = vec![vec![0.0, 0.0], vec![0.5, 1.0]];
        let headers = vec!["s(t)".to_string(), "v(t)".to_string()];
        (rows, headers, vec![0.0, 1.0])
    }

    #[test]
    fn test_save_rows_to_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("motion.csv");
        let (rows, headers, mesh) = sample();
        save_rows_to_csv(&rows, &headers, path.to_str().unwrap(), &mesh, "t").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "t,s(t),v(t)\n0,0,0\n1,0.5,1\n");
    }
}
