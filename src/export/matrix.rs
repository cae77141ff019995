//! Textual dumps of adjacency matrices

use std::str::FromStr;

use clap::ValueEnum;

use crate::error::GraphError;

/// How a matrix is rendered for the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MatrixFormat {
    /// Rows of space-separated integers
    #[default]
    Plaintext,

    /// A C# `decimal[,]` initializer ready to paste into source
    #[value(name = "csharp")]
    CSharp,
}

impl MatrixFormat {
    /// Render the rows of a square matrix, heading line included
    pub fn render<I>(self, rows: I) -> String
    where
        I: IntoIterator<Item = Vec<u32>>,
    {
        let mut out = String::new();

        match self {
            Self::Plaintext => {
                out.push_str("Adjacency Matrix:\n");
                for row in rows {
                    out.push_str(&join(&row, " "));
                    out.push('\n');
                }
            }
            Self::CSharp => {
                out.push_str("Adjacency Matrix in C# format:\n");
                out.push_str("new decimal[,] {\n");
                for row in rows {
                    out.push_str(&format!("    {{ {} }},\n", join(&row, ", ")));
                }
                out.push_str("};\n");
            }
        }

        out
    }
}

impl FromStr for MatrixFormat {
    type Err = GraphError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "plaintext" => Ok(Self::Plaintext),
            "csharp" => Ok(Self::CSharp),
            other => Err(GraphError::UnsupportedFormat(other.to_string())),
        }
    }
}

fn join(row: &[u32], separator: &str) -> String {
    row.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Vec<u32>> {
        vec![vec![0, 3], vec![3, 0]]
    }

    #[test]
    fn plaintext_rows() {
        assert_eq!(
            MatrixFormat::Plaintext.render(sample_rows()),
            "Adjacency Matrix:\n0 3\n3 0\n"
        );
    }

    #[test]
    fn csharp_initializer() {
        assert_eq!(
            MatrixFormat::CSharp.render(sample_rows()),
            "Adjacency Matrix in C# format:\nnew decimal[,] {\n    { 0, 3 },\n    { 3, 0 },\n};\n"
        );
    }

    #[test]
    fn parses_known_formats() {
        assert_eq!("plaintext".parse(), Ok(MatrixFormat::Plaintext));
        assert_eq!("csharp".parse(), Ok(MatrixFormat::CSharp));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert_eq!(
            "python".parse::<MatrixFormat>(),
            Err(GraphError::UnsupportedFormat("python".to_string()))
        );
    }
}
