//! Destinations a generated password can be saved to.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use copypasta::{ClipboardContext, ClipboardProvider};
use log::info;
use zeroize::{Zeroize, Zeroizing};

use super::Password;

/// File name used when no destination is given.
pub const DEFAULT_FILE: &str = "generated_passwords.txt";

pub trait Sink {
    fn save(&mut self, password: &Password) -> io::Result<()>;

    /// Human-readable description of where passwords end up.
    fn destination(&self) -> String;
}

/// Appends one password per line to a text file, creating it if absent.
#[derive(Debug, Clone)]
pub struct AppendFile {
    path: PathBuf,
}

impl AppendFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Sink for AppendFile {
    fn save(&mut self, password: &Password) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        // One write per line
        let mut line = Vec::with_capacity(password.as_str().len() + 1);
        line.extend_from_slice(password.as_str().as_bytes());
        line.push(b'\n');
        let result = file.write_all(&line);
        line.zeroize();
        result?;

        info!("appended password to {}", self.path.display());
        Ok(())
    }

    fn destination(&self) -> String {
        fs::canonicalize(&self.path)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|_| self.path.display().to_string())
    }
}

/// Places passwords on the system clipboard, one per line.
pub struct Clipboard {
    ctx: ClipboardContext,
    contents: Zeroizing<String>,
}

impl Clipboard {
    pub fn new() -> io::Result<Self> {
        let ctx = ClipboardContext::new().map_err(|e| io::Error::other(e.to_string()))?;
        Ok(Self {
            ctx,
            contents: Zeroizing::new(String::new()),
        })
    }
}

impl Sink for Clipboard {
    fn save(&mut self, password: &Password) -> io::Result<()> {
        self.contents = append_line(&self.contents, password);
        // copypasta takes ownership of a plain String; that copy is not zeroed
        self.ctx
            .set_contents(self.contents.as_str().to_owned())
            .map_err(|e| io::Error::other(e.to_string()))?;
        info!("copied password to clipboard");
        Ok(())
    }

    fn destination(&self) -> String {
        "clipboard".to_string()
    }
}

/// `contents` plus `password` on a new line, built in one exactly sized
/// allocation so growth never leaves an unzeroed copy behind.
fn append_line(contents: &str, password: &Password) -> Zeroizing<String> {
    let sep = usize::from(!contents.is_empty());
    let mut next = Zeroizing::new(String::with_capacity(
        contents.len() + sep + password.as_str().len(),
    ));
    next.push_str(contents);
    if sep == 1 {
        next.push('\n');
    }
    next.push_str(password.as_str());
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{GenerationConfig, generate};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn password(seed: u64) -> Password {
        generate(&GenerationConfig::default(), &mut ChaCha20Rng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn creates_file_and_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE);
        let mut sink = AppendFile::new(&path);

        let first = password(1);
        let second = password(2);
        sink.save(&first).unwrap();
        sink.save(&second).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("{}\n{}\n", first.as_str(), second.as_str()));
    }

    #[test]
    fn keeps_existing_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passwords.txt");
        fs::write(&path, "existing\n").unwrap();

        let pass = password(3);
        AppendFile::new(&path).save(&pass).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, format!("existing\n{}\n", pass.as_str()));
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");
        AppendFile::new(&path).save(&password(4)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn clipboard_contents_join_passwords_without_regrowth() {
        let first = password(6);
        let second = password(7);

        let once = append_line("", &first);
        assert_eq!(once.as_str(), first.as_str());
        assert_eq!(once.capacity(), once.len());

        let twice = append_line(&once, &second);
        assert_eq!(twice.as_str(), format!("{first}\n{second}"));
        assert_eq!(twice.capacity(), twice.len());
    }

    #[test]
    fn destination_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let mut sink = AppendFile::new(&path);
        sink.save(&password(5)).unwrap();
        assert!(sink.destination().ends_with("out.txt"));
    }
}
