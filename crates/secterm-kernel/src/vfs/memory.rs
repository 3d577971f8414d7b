//! In-memory tree filesystem.
//!
//! Nodes are owned by their parent's child list; there are no back
//! references and no links, so the tree cannot contain cycles. Children keep
//! insertion order, which is the order `ls` prints.

use super::traits::{EntryType, Filesystem, VfsError};
use crate::config::ShellConfig;
use crate::paths;

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Directory(Directory),
    File(String),
}

impl Node {
    pub fn entry_type(&self) -> EntryType {
        match self {
            Node::Directory(_) => EntryType::Directory,
            Node::File(_) => EntryType::File,
        }
    }
}

/// A directory: named children in insertion order, names unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    children: Vec<(String, Node)>,
}

impl Directory {
    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.children
            .iter_mut()
            .find(|(child, _)| child == name)
            .map(|(_, node)| node)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// The static filesystem a shell session operates against.
///
/// Built once with [`VfsBuilder`] and read-only afterwards; share it between
/// sessions behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualFs {
    root: Directory,
}

impl VirtualFs {
    /// Start building a filesystem.
    pub fn builder() -> VfsBuilder {
        VfsBuilder::default()
    }

    /// The stock terminal layout, with document content drawn from `config`.
    ///
    /// ```text
    /// /
    /// ├── readme.txt
    /// ├── docs/
    /// │   ├── regions.txt
    /// │   └── companies.txt
    /// └── secrets
    /// ```
    pub fn default_layout(config: &ShellConfig) -> Result<Self, VfsError> {
        Self::builder()
            .file(
                "/readme.txt",
                "Field terminal. Documents live in /docs.\nSome files require clearance.",
            )
            .dir("/docs")
            .file("/docs/regions.txt", config.regions.join("\n"))
            .file("/docs/companies.txt", config.companies.join("\n"))
            .file("/secrets", config.secret.clone())
            .build()
    }

    /// Walk the tree to the node at a canonical path.
    pub fn lookup(&self, path: &str) -> Option<&Node> {
        let mut dir = &self.root;
        let mut segments = paths::segments(path).peekable();

        if segments.peek().is_none() {
            return None;
        }

        while let Some(segment) = segments.next() {
            let node = dir.get(segment)?;
            if segments.peek().is_none() {
                return Some(node);
            }
            match node {
                Node::Directory(child) => dir = child,
                Node::File(_) => return None,
            }
        }
        None
    }

    /// The directory at a canonical path, including the root.
    fn directory(&self, path: &str) -> Option<&Directory> {
        if paths::segments(path).next().is_none() {
            return Some(&self.root);
        }
        match self.lookup(path)? {
            Node::Directory(dir) => Some(dir),
            Node::File(_) => None,
        }
    }
}

impl Filesystem for VirtualFs {
    fn stat(&self, path: &str) -> Option<EntryType> {
        if paths::segments(path).next().is_none() {
            return Some(EntryType::Directory);
        }
        self.lookup(path).map(Node::entry_type)
    }

    fn list_directory(&self, path: &str) -> Option<Vec<String>> {
        self.directory(path)
            .map(|dir| dir.names().map(str::to_string).collect())
    }

    fn read_file(&self, path: &str) -> Option<&str> {
        match self.lookup(path)? {
            Node::File(content) => Some(content.as_str()),
            Node::Directory(_) => None,
        }
    }
}

/// Builder for [`VirtualFs`].
///
/// Missing parent directories are created on demand. The first layout
/// conflict is kept and reported by [`VfsBuilder::build`].
#[derive(Debug, Default)]
pub struct VfsBuilder {
    root: Directory,
    error: Option<VfsError>,
}

impl VfsBuilder {
    /// Add a directory (and its parents). Adding an existing directory is a no-op.
    pub fn dir(mut self, path: &str) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.insert(path, None) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Add a file with `content`, creating parent directories as needed.
    pub fn file(mut self, path: &str, content: impl Into<String>) -> Self {
        if self.error.is_none() {
            if let Err(e) = self.insert(path, Some(content.into())) {
                self.error = Some(e);
            }
        }
        self
    }

    /// Finish the layout.
    pub fn build(self) -> Result<VirtualFs, VfsError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(VirtualFs { root: self.root }),
        }
    }

    fn insert(&mut self, path: &str, content: Option<String>) -> Result<(), VfsError> {
        if !path.starts_with('/') {
            return Err(VfsError::NotAbsolute(path.to_string()));
        }
        let canonical = paths::resolve("/", path);
        let names: Vec<&str> = paths::segments(&canonical).collect();
        let Some((leaf, parents)) = names.split_last() else {
            return match content {
                Some(_) => Err(VfsError::RootIsDirectory),
                None => Ok(()),
            };
        };

        let mut dir = &mut self.root;
        let mut walked = String::new();
        for name in parents {
            walked.push('/');
            walked.push_str(name);
            if dir.get(name).is_none() {
                dir.children
                    .push((name.to_string(), Node::Directory(Directory::default())));
            }
            dir = match dir.get_mut(name) {
                Some(Node::Directory(child)) => child,
                _ => return Err(VfsError::NotDirectory(walked)),
            };
        }

        let existing = dir.get(leaf).map(Node::entry_type);
        match (existing, content) {
            (None, Some(content)) => {
                dir.children.push((leaf.to_string(), Node::File(content)));
                Ok(())
            }
            (None, None) => {
                dir.children
                    .push((leaf.to_string(), Node::Directory(Directory::default())));
                Ok(())
            }
            (Some(EntryType::Directory), None) => Ok(()),
            (Some(_), _) => Err(VfsError::AlreadyExists(canonical.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VirtualFs {
        VirtualFs::builder()
            .dir("/docs")
            .file("/docs/regions.txt", "europe\nasia")
            .file("/docs/companies.txt", "Acme")
            .file("/secrets", "shh")
            .build()
            .unwrap()
    }

    #[test]
    fn test_root_is_directory() {
        let fs = sample();
        assert!(fs.is_directory("/"));
        assert_eq!(fs.read_file("/"), None);
        assert_eq!(
            fs.list_directory("/").unwrap(),
            vec!["docs".to_string(), "secrets".to_string()]
        );
    }

    #[test]
    fn test_listing_keeps_insertion_order() {
        let fs = sample();
        let first = fs.list_directory("/docs").unwrap();
        assert_eq!(first, vec!["regions.txt", "companies.txt"]);
        assert_eq!(fs.list_directory("/docs").unwrap(), first);
    }

    #[test]
    fn test_read_file() {
        let fs = sample();
        assert_eq!(fs.read_file("/docs/regions.txt"), Some("europe\nasia"));
        assert_eq!(fs.read_file("/docs"), None);
        assert_eq!(fs.read_file("/missing"), None);
    }

    #[test]
    fn test_is_directory_through_file_is_false() {
        let fs = sample();
        assert!(fs.is_directory("/docs"));
        assert!(!fs.is_directory("/secrets"));
        assert!(!fs.is_directory("/secrets/inner"));
        assert!(!fs.is_directory("/nope"));
        assert_eq!(fs.list_directory("/secrets"), None);
    }

    #[test]
    fn test_builder_creates_parents() {
        let fs = VirtualFs::builder()
            .file("/a/b/c.txt", "deep")
            .build()
            .unwrap();
        assert!(fs.is_directory("/a"));
        assert!(fs.is_directory("/a/b"));
        assert!(fs.is_file("/a/b/c.txt"));
    }

    #[test]
    fn test_builder_rejects_file_under_file() {
        let result = VirtualFs::builder()
            .file("/secrets", "x")
            .file("/secrets/more", "y")
            .build();
        assert_eq!(result, Err(VfsError::NotDirectory("/secrets".into())));
    }

    #[test]
    fn test_builder_rejects_duplicate_file() {
        let result = VirtualFs::builder()
            .file("/a.txt", "1")
            .file("/a.txt", "2")
            .build();
        assert_eq!(result, Err(VfsError::AlreadyExists("/a.txt".into())));
    }

    #[test]
    fn test_builder_rejects_relative_and_root_file() {
        assert_eq!(
            VirtualFs::builder().file("a.txt", "").build(),
            Err(VfsError::NotAbsolute("a.txt".into()))
        );
        assert_eq!(
            VirtualFs::builder().file("/", "").build(),
            Err(VfsError::RootIsDirectory)
        );
    }

    #[test]
    fn test_default_layout_renders_config() {
        let config = ShellConfig::default();
        let fs = VirtualFs::default_layout(&config).unwrap();
        assert_eq!(
            fs.list_directory("/docs").unwrap(),
            vec!["regions.txt", "companies.txt"]
        );
        assert_eq!(fs.read_file("/secrets"), Some(config.secret.as_str()));
        assert!(fs
            .read_file("/docs/regions.txt")
            .unwrap()
            .lines()
            .eq(config.regions.iter().map(String::as_str)));
    }
}
