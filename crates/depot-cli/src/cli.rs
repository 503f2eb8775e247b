//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// depot - copy files around and upload them to local or remote storage
#[derive(Parser, Debug)]
#[command(name = "depot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Root directory for relative paths (defaults to the executable's directory)
    #[arg(long, global = true, env = "DEPOT_ROOT")]
    pub root: Option<PathBuf>,

    /// Treat path arguments as absolute instead of relative to the root
    #[arg(short, long, global = true)]
    pub absolute: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Copy one file into a directory
    CopyFile {
        /// File to copy
        source: String,

        /// Destination directory (created if missing)
        dest_dir: String,

        /// Name of the copy (defaults to the source's file name)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Copy several files into one directory, stopping at the first failure
    CopyMany {
        /// Destination directory (created if missing)
        dest_dir: String,

        /// Files to copy, in order
        #[arg(required = true)]
        sources: Vec<String>,
    },

    /// Copy every file below a directory into one flat directory
    ///
    /// Subdirectories are not recreated: all files land directly in
    /// DEST_DIR and a later file overwrites an earlier one with the same name.
    CopyDir {
        /// Directory to copy
        source: String,

        /// Destination directory (created if missing)
        dest_dir: String,
    },

    /// Create a directory and its parents
    Mkdir {
        path: String,
    },

    /// Delete a file or a whole directory tree
    Delete {
        path: String,
    },

    /// Write text to a file
    Write {
        path: String,

        text: String,

        /// Append instead of overwriting from the start
        #[arg(long)]
        append: bool,
    },

    /// Replace a file with everything read from standard input
    Ingest {
        path: String,
    },

    /// Upload a file with the driver named in a configuration file
    Upload {
        /// File to upload
        source: String,

        /// Destination path or URL, depending on the driver
        dest: String,

        /// Transfer configuration (.toml, .json or .yaml)
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_copy_file_with_name() {
        let cli = Cli::parse_from(["depot", "copy-file", "a.txt", "out", "--name", "b.txt"]);
        match cli.command {
            Commands::CopyFile {
                source,
                dest_dir,
                name,
            } => {
                assert_eq!(source, "a.txt");
                assert_eq!(dest_dir, "out");
                assert_eq!(name, Some("b.txt".to_string()));
            }
            _ => panic!("Expected CopyFile command"),
        }
    }

    #[test]
    fn parse_copy_many_keeps_order() {
        let cli = Cli::parse_from(["depot", "copy-many", "out", "b", "a"]);
        match cli.command {
            Commands::CopyMany { dest_dir, sources } => {
                assert_eq!(dest_dir, "out");
                assert_eq!(sources, vec!["b", "a"]);
            }
            _ => panic!("Expected CopyMany command"),
        }
    }

    #[test]
    fn copy_many_requires_a_source() {
        assert!(Cli::try_parse_from(["depot", "copy-many", "out"]).is_err());
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["depot", "mkdir", "x", "--absolute", "--root", "/srv"]);
        assert!(cli.absolute);
        assert_eq!(cli.root, Some(PathBuf::from("/srv")));
        assert!(matches!(cli.command, Commands::Mkdir { .. }));
    }

    #[test]
    fn parse_write_append() {
        let cli = Cli::parse_from(["depot", "write", "log.txt", "line", "--append"]);
        assert!(matches!(cli.command, Commands::Write { append: true, .. }));
    }

    #[test]
    fn parse_upload_command() {
        let cli = Cli::parse_from(["depot", "upload", "a.bin", "http://x/a.bin", "-c", "up.toml"]);
        match cli.command {
            Commands::Upload {
                source,
                dest,
                config,
            } => {
                assert_eq!(source, "a.bin");
                assert_eq!(dest, "http://x/a.bin");
                assert_eq!(config, PathBuf::from("up.toml"));
            }
            _ => panic!("Expected Upload command"),
        }
    }
}
