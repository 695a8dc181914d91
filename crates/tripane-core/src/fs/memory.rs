//! In-memory [`FileSystemGateway`] for tests.
//!
//! Holds a tree of folders and files keyed by absolute path and records
//! every mutating or launching call. Listing and mutation failures can be
//! injected per path.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};
use crate::fs::entry::{EntryKind, FileEntry};
use crate::fs::gateway::FileSystemGateway;
use crate::fs::ops::sort_entries;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Folder,
    File(Vec<u8>),
}

/// A gateway call that changes the filesystem or launches a process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Delete(PathBuf),
    Copy(PathBuf, PathBuf),
    Move(PathBuf, PathBuf),
    Open(PathBuf),
}

#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
    mutations: RefCell<Vec<Mutation>>,
    unreadable: RefCell<HashSet<PathBuf>>,
    failing: RefCell<HashSet<PathBuf>>,
}

impl MemoryFs {
    /// Creates a filesystem containing only the root folder.
    pub fn new() -> Self {
        let fs = Self::default();
        fs.nodes.borrow_mut().insert(PathBuf::from("/"), Node::Folder);
        fs
    }

    /// Adds a folder (and any missing ancestors).
    pub fn with_folder(self, path: &str) -> Self {
        self.insert_ancestors(Path::new(path));
        self.nodes
            .borrow_mut()
            .insert(PathBuf::from(path), Node::Folder);
        self
    }

    /// Adds a file (and any missing ancestor folders).
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.insert_ancestors(Path::new(path));
        self.nodes
            .borrow_mut()
            .insert(PathBuf::from(path), Node::File(content.as_bytes().to_vec()));
        self
    }

    /// Makes `list(path)` fail with `PermissionDenied`.
    pub fn deny_listing(&self, path: &str) {
        self.unreadable.borrow_mut().insert(PathBuf::from(path));
    }

    /// Makes every mutation whose source is `path` fail with an I/O error.
    pub fn fail_mutations_of(&self, path: &str) {
        self.failing.borrow_mut().insert(PathBuf::from(path));
    }

    /// Removes a path (and its subtree) behind the browser's back.
    pub fn remove_externally(&self, path: &str) {
        let path = Path::new(path);
        self.nodes.borrow_mut().retain(|p, _| !p.starts_with(path));
    }

    pub fn exists(&self, path: &str) -> bool {
        self.nodes.borrow().contains_key(Path::new(path))
    }

    pub fn content(&self, path: &str) -> Option<String> {
        match self.nodes.borrow().get(Path::new(path)) {
            Some(Node::File(bytes)) => Some(String::from_utf8_lossy(bytes).into_owned()),
            _ => None,
        }
    }

    pub fn mutations(&self) -> Vec<Mutation> {
        self.mutations.borrow().clone()
    }

    fn insert_ancestors(&self, path: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for ancestor in path.ancestors().skip(1) {
            nodes.entry(ancestor.to_path_buf()).or_insert(Node::Folder);
        }
    }

    fn check_failure(&self, path: &Path) -> CoreResult<()> {
        if self.failing.borrow().contains(path) {
            return Err(CoreError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("injected failure for {}", path.display()),
            )));
        }
        Ok(())
    }

    fn transfer_target(&self, src: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
        self.check_failure(src)?;
        let nodes = self.nodes.borrow();
        let src_node = nodes
            .get(src)
            .ok_or_else(|| CoreError::NotFound(src.to_path_buf()))?;
        match nodes.get(dest_dir) {
            Some(Node::Folder) => {}
            Some(Node::File(_)) => return Err(CoreError::NotADirectory(dest_dir.to_path_buf())),
            None => return Err(CoreError::NotFound(dest_dir.to_path_buf())),
        }
        let name = src
            .file_name()
            .ok_or_else(|| CoreError::InvalidName(src.display().to_string()))?;
        if *src_node == Node::Folder && dest_dir.starts_with(src) {
            return Err(CoreError::InvalidName(format!(
                "cannot paste {} into itself",
                src.display()
            )));
        }
        let target = dest_dir.join(name);
        if nodes.contains_key(&target) {
            return Err(CoreError::AlreadyExists(target));
        }
        Ok(target)
    }

    fn subtree(&self, root: &Path) -> Vec<(PathBuf, Node)> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(p, _)| p.starts_with(root))
            .map(|(p, n)| (p.clone(), n.clone()))
            .collect()
    }

    fn graft(&self, subtree: Vec<(PathBuf, Node)>, from: &Path, to: &Path) {
        let mut nodes = self.nodes.borrow_mut();
        for (path, node) in subtree {
            if let Ok(rest) = path.strip_prefix(from) {
                let new_path = if rest.as_os_str().is_empty() {
                    to.to_path_buf()
                } else {
                    to.join(rest)
                };
                nodes.insert(new_path, node);
            }
        }
    }
}

impl FileSystemGateway for MemoryFs {
    fn list(&self, path: &Path) -> CoreResult<Vec<FileEntry>> {
        if self.unreadable.borrow().contains(path) {
            return Err(CoreError::PermissionDenied(path.to_path_buf()));
        }
        let nodes = self.nodes.borrow();
        match nodes.get(path) {
            Some(Node::Folder) => {}
            Some(Node::File(_)) => return Err(CoreError::NotADirectory(path.to_path_buf())),
            None => return Err(CoreError::NotFound(path.to_path_buf())),
        }
        let entries = nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .map(|(p, node)| match node {
                Node::Folder => FileEntry::from_parts(p.clone(), EntryKind::Folder, 0),
                Node::File(bytes) => {
                    FileEntry::from_parts(p.clone(), EntryKind::File, bytes.len() as u64)
                }
            })
            .collect();
        Ok(sort_entries(entries))
    }

    fn read_text(&self, path: &Path, max_bytes: u64) -> CoreResult<Vec<u8>> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(bytes)) => {
                let end = bytes.len().min(max_bytes as usize);
                Ok(bytes[..end].to_vec())
            }
            Some(Node::Folder) => Err(CoreError::IsAFolder(path.to_path_buf())),
            None => Err(CoreError::NotFound(path.to_path_buf())),
        }
    }

    fn delete(&self, path: &Path) -> CoreResult<()> {
        self.mutations
            .borrow_mut()
            .push(Mutation::Delete(path.to_path_buf()));
        self.check_failure(path)?;
        let mut nodes = self.nodes.borrow_mut();
        match nodes.remove(path) {
            Some(Node::File(_)) => Ok(()),
            Some(Node::Folder) => {
                nodes.insert(path.to_path_buf(), Node::Folder);
                Err(CoreError::IsAFolder(path.to_path_buf()))
            }
            None => Err(CoreError::NotFound(path.to_path_buf())),
        }
    }

    fn copy(&self, src: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
        self.mutations
            .borrow_mut()
            .push(Mutation::Copy(src.to_path_buf(), dest_dir.to_path_buf()));
        let target = self.transfer_target(src, dest_dir)?;
        let subtree = self.subtree(src);
        self.graft(subtree, src, &target);
        Ok(target)
    }

    fn move_to(&self, src: &Path, dest_dir: &Path) -> CoreResult<PathBuf> {
        self.mutations
            .borrow_mut()
            .push(Mutation::Move(src.to_path_buf(), dest_dir.to_path_buf()));
        let target = self.transfer_target(src, dest_dir)?;
        let subtree = self.subtree(src);
        self.nodes.borrow_mut().retain(|p, _| !p.starts_with(src));
        self.graft(subtree, src, &target);
        Ok(target)
    }

    fn open_externally(&self, path: &Path) -> CoreResult<()> {
        self.mutations
            .borrow_mut()
            .push(Mutation::Open(path.to_path_buf()));
        self.check_failure(path)?;
        if !self.nodes.borrow().contains_key(path) {
            return Err(CoreError::NotFound(path.to_path_buf()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MemoryFs {
        MemoryFs::new()
            .with_folder("/a/b")
            .with_file("/a/c.txt", "hello")
    }

    #[test]
    fn lists_direct_children_only() {
        let fs = sample().with_file("/a/b/deep.txt", "");
        let names: Vec<String> = fs
            .list(Path::new("/a"))
            .unwrap()
            .iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, vec!["b", "c.txt"]);
    }

    #[test]
    fn root_lists_top_level() {
        let fs = sample();
        let entries = fs.list(Path::new("/")).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name(), "a");
    }

    #[test]
    fn denied_listing_fails() {
        let fs = sample();
        fs.deny_listing("/a");
        assert!(matches!(
            fs.list(Path::new("/a")).unwrap_err(),
            CoreError::PermissionDenied(_)
        ));
    }

    #[test]
    fn move_relocates_subtree() {
        let fs = sample().with_file("/a/b/inner.txt", "x");
        fs.move_to(Path::new("/a/b"), Path::new("/")).unwrap();
        assert!(fs.exists("/b/inner.txt"));
        assert!(!fs.exists("/a/b"));
    }

    #[test]
    fn copy_keeps_source() {
        let fs = sample();
        fs.copy(Path::new("/a/c.txt"), Path::new("/a/b")).unwrap();
        assert_eq!(fs.content("/a/b/c.txt").as_deref(), Some("hello"));
        assert!(fs.exists("/a/c.txt"));
    }

    #[test]
    fn records_mutations() {
        let fs = sample();
        let _ = fs.delete(Path::new("/a/c.txt"));
        assert_eq!(
            fs.mutations(),
            vec![Mutation::Delete(PathBuf::from("/a/c.txt"))]
        );
    }
}
