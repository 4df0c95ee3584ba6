//! In-memory file tree.
//!
//! Nodes are keyed by normalized absolute path in a `BTreeMap`, so a directory's
//! descendants are a contiguous key range. Timestamps come from a logical clock.

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::path::{filename, is_under, join_path, normalize_path, parent_path, validate_name};
use super::FsError;

/// Directory that `trash` moves entries into
pub const TRASH_DIR: &str = "/Trash";

/// Kind of a tree node
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// A file or directory
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FileNode {
    pub path: String,
    pub name: String,
    pub kind: NodeKind,
    /// Content length in bytes (0 for directories)
    pub size: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    pub created: u64,
    pub modified: u64,
}

impl FileNode {
    fn directory(path: String, now: u64) -> Self {
        Self {
            name: filename(&path).to_string(),
            path,
            kind: NodeKind::Directory,
            size: 0,
            content: String::new(),
            created: now,
            modified: now,
        }
    }

    fn file(path: String, content: String, now: u64) -> Self {
        Self {
            name: filename(&path).to_string(),
            path,
            kind: NodeKind::File,
            size: content.len() as u64,
            content,
            created: now,
            modified: now,
        }
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Path-keyed tree of directories and text files
#[derive(Clone, Debug)]
pub struct FileTree {
    nodes: BTreeMap<String, FileNode>,
    /// Logical clock for created/modified stamps
    clock: u64,
}

impl Default for FileTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FileTree {
    /// Create a tree holding only the root directory
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert("/".to_string(), FileNode::directory("/".to_string(), 0));
        Self { nodes, clock: 1 }
    }

    /// Create a tree with the standard top-level folders
    pub fn with_skeleton() -> Self {
        let mut tree = Self::new();
        for dir in ["/Applications", "/Documents", "/System", TRASH_DIR] {
            // Fresh tree: these cannot collide
            let _ = tree.mkdir(dir);
        }
        tree
    }

    /// Rebuild a tree from persisted nodes.
    ///
    /// Nodes with invalid paths or without a directory parent are dropped.
    pub fn from_nodes(nodes: Vec<FileNode>) -> Self {
        let mut tree = Self::new();
        let mut sorted = nodes;
        sorted.sort_by(|a, b| a.path.cmp(&b.path));

        for mut node in sorted {
            let Ok(path) = normalize_path(&node.path) else {
                debug!(path = %node.path, "dropping node with invalid path");
                continue;
            };
            if path == "/" || tree.nodes.contains_key(&path) {
                continue;
            }
            if !tree.is_dir(&parent_path(&path)) {
                debug!(path = %path, "dropping orphaned node");
                continue;
            }
            tree.clock = tree
                .clock
                .max(node.modified.saturating_add(1))
                .max(node.created.saturating_add(1));
            node.name = filename(&path).to_string();
            node.path = path.clone();
            if node.kind == NodeKind::File {
                node.size = node.content.len() as u64;
            }
            tree.nodes.insert(path, node);
        }
        tree
    }

    /// All nodes except the root, in path order
    pub fn nodes(&self) -> Vec<FileNode> {
        self.nodes
            .values()
            .filter(|n| n.path != "/")
            .cloned()
            .collect()
    }

    fn tick(&mut self) -> u64 {
        let now = self.clock;
        self.clock = self.clock.saturating_add(1);
        now
    }

    fn is_dir(&self, path: &str) -> bool {
        self.nodes.get(path).map_or(false, FileNode::is_directory)
    }

    /// Check the parent of `path` exists and is a directory
    fn require_parent_dir(&self, path: &str) -> Result<(), FsError> {
        let parent = parent_path(path);
        match self.nodes.get(&parent) {
            Some(p) if p.is_directory() => Ok(()),
            Some(_) => Err(FsError::NotADirectory(parent)),
            None => Err(FsError::NotFound(parent)),
        }
    }

    fn touch(&mut self, path: &str) {
        let now = self.tick();
        if let Some(node) = self.nodes.get_mut(path) {
            node.modified = now;
        }
    }

    /// Create a directory; the parent must exist
    pub fn mkdir(&mut self, path: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;
        if self.nodes.contains_key(&path) {
            return Err(FsError::AlreadyExists(path));
        }
        self.require_parent_dir(&path)?;

        let now = self.tick();
        let parent = parent_path(&path);
        self.nodes.insert(path.clone(), FileNode::directory(path, now));
        self.touch(&parent);
        Ok(())
    }

    /// Create a directory and any missing ancestors
    pub fn mkdir_p(&mut self, path: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;

        let mut current = "/".to_string();
        for component in path.split('/').filter(|c| !c.is_empty()) {
            current = join_path(&current, component);
            match self.nodes.get(&current) {
                Some(node) if node.is_directory() => continue,
                Some(_) => return Err(FsError::NotADirectory(current)),
                None => {
                    let now = self.tick();
                    self.nodes
                        .insert(current.clone(), FileNode::directory(current.clone(), now));
                }
            }
        }
        Ok(())
    }

    /// Create a new file; fails if the path is taken
    pub fn create_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;
        if self.nodes.contains_key(&path) {
            return Err(FsError::AlreadyExists(path));
        }
        self.write_file(&path, content)
    }

    /// Create or overwrite a file
    pub fn write_file(&mut self, path: &str, content: &str) -> Result<(), FsError> {
        let path = normalize_path(path)?;
        if path == "/" {
            return Err(FsError::NotAFile(path));
        }
        self.require_parent_dir(&path)?;

        let now = self.tick();
        match self.nodes.get_mut(&path) {
            Some(node) if node.is_directory() => return Err(FsError::NotAFile(path)),
            Some(node) => {
                node.content = content.to_string();
                node.size = content.len() as u64;
                node.modified = now;
            }
            None => {
                let parent = parent_path(&path);
                self.nodes
                    .insert(path.clone(), FileNode::file(path, content.to_string(), now));
                self.touch(&parent);
            }
        }
        Ok(())
    }

    /// Read a file's content
    pub fn read_file(&self, path: &str) -> Result<&str, FsError> {
        let node = self.stat(path)?;
        if node.is_directory() {
            return Err(FsError::NotAFile(node.path.clone()));
        }
        Ok(&node.content)
    }

    /// Get a node's metadata
    pub fn stat(&self, path: &str) -> Result<&FileNode, FsError> {
        let path = normalize_path(path)?;
        self.nodes.get(&path).ok_or(FsError::NotFound(path))
    }

    pub fn exists(&self, path: &str) -> bool {
        self.stat(path).is_ok()
    }

    /// Direct children of a directory: directories first, then by name
    pub fn list(&self, path: &str) -> Result<Vec<&FileNode>, FsError> {
        let path = normalize_path(path)?;
        match self.nodes.get(&path) {
            Some(node) if node.is_directory() => {}
            Some(_) => return Err(FsError::NotADirectory(path)),
            None => return Err(FsError::NotFound(path)),
        }

        let mut children: Vec<&FileNode> = self
            .descendants(&path)
            .filter(|n| parent_path(&n.path) == path)
            .collect();
        children.sort_by(|a, b| {
            b.is_directory()
                .cmp(&a.is_directory())
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        });
        Ok(children)
    }

    /// Rename an entry in place, returning its new path
    pub fn rename(&mut self, path: &str, new_name: &str) -> Result<String, FsError> {
        validate_name(new_name)?;
        let path = self.existing_mutable(path)?;
        let target = join_path(&parent_path(&path), new_name);
        if target == path {
            return Ok(target);
        }
        if self.nodes.contains_key(&target) {
            return Err(FsError::AlreadyExists(target));
        }
        self.relocate(&path, &target);
        Ok(target)
    }

    /// Move an entry into another directory, returning its new path
    pub fn move_to(&mut self, path: &str, dest_dir: &str) -> Result<String, FsError> {
        let path = self.existing_mutable(path)?;
        let dest_dir = normalize_path(dest_dir)?;
        match self.nodes.get(&dest_dir) {
            Some(node) if node.is_directory() => {}
            Some(_) => return Err(FsError::NotADirectory(dest_dir)),
            None => return Err(FsError::NotFound(dest_dir)),
        }
        if is_under(&dest_dir, &path) {
            return Err(FsError::MoveIntoSelf(path));
        }

        let target = join_path(&dest_dir, filename(&path));
        if target == path {
            return Ok(target);
        }
        if self.nodes.contains_key(&target) {
            return Err(FsError::AlreadyExists(target));
        }
        self.relocate(&path, &target);
        Ok(target)
    }

    /// Remove an entry; non-empty directories need `recursive`
    pub fn remove(&mut self, path: &str, recursive: bool) -> Result<(), FsError> {
        let path = self.existing_mutable(path)?;
        let doomed: Vec<String> = self
            .descendants(&path)
            .map(|n| n.path.clone())
            .chain(std::iter::once(path.clone()))
            .collect();

        if doomed.len() > 1 && !recursive {
            return Err(FsError::DirectoryNotEmpty(path));
        }
        for p in &doomed {
            self.nodes.remove(p);
        }
        self.touch(&parent_path(&path));
        debug!(path = %path, removed = doomed.len(), "removed from file tree");
        Ok(())
    }

    /// Move an entry into the trash, renaming on collision
    pub fn trash(&mut self, path: &str) -> Result<String, FsError> {
        let path = self.existing_mutable(path)?;
        if is_under(&path, TRASH_DIR) {
            return Err(FsError::PermissionDenied(path));
        }
        self.mkdir_p(TRASH_DIR)?;

        let name = filename(&path).to_string();
        let mut target = join_path(TRASH_DIR, &name);
        let mut n = 2;
        while self.nodes.contains_key(&target) {
            target = join_path(TRASH_DIR, &format!("{} {}", name, n));
            n += 1;
        }
        self.relocate(&path, &target);
        Ok(target)
    }

    /// Permanently delete everything in the trash
    pub fn empty_trash(&mut self) -> usize {
        let doomed: Vec<String> = self
            .descendants(TRASH_DIR)
            .map(|n| n.path.clone())
            .collect();
        for p in &doomed {
            self.nodes.remove(p);
        }
        doomed.len()
    }

    /// Case-insensitive name search across the whole tree, in path order
    pub fn search(&self, query: &str) -> Vec<&FileNode> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        self.nodes
            .values()
            .filter(|n| n.path != "/" && n.name.to_lowercase().contains(&query))
            .collect()
    }

    /// Total bytes of all files at or under `path`
    pub fn total_size(&self, path: &str) -> Result<u64, FsError> {
        let node = self.stat(path)?;
        if !node.is_directory() {
            return Ok(node.size);
        }
        Ok(self.descendants(&node.path).map(|n| n.size).sum())
    }

    /// Number of nodes, root excluded
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalize and check the path exists and is not a protected directory
    fn existing_mutable(&self, path: &str) -> Result<String, FsError> {
        let path = normalize_path(path)?;
        if path == "/" || path == TRASH_DIR {
            return Err(FsError::PermissionDenied(path));
        }
        if !self.nodes.contains_key(&path) {
            return Err(FsError::NotFound(path));
        }
        Ok(path)
    }

    /// Strict descendants of `path`
    fn descendants<'a>(&'a self, path: &str) -> impl Iterator<Item = &'a FileNode> + 'a {
        let prefix = if path == "/" {
            "/".to_string()
        } else {
            format!("{}/", path)
        };
        self.nodes
            .range(prefix.clone()..)
            .take_while(move |(k, _)| k.starts_with(&prefix))
            .map(|(_, n)| n)
            .filter(|n| n.path != "/")
    }

    /// Re-key a node and its subtree from `from` to `to`
    fn relocate(&mut self, from: &str, to: &str) {
        let moved: Vec<String> = self
            .descendants(from)
            .map(|n| n.path.clone())
            .chain(std::iter::once(from.to_string()))
            .collect();

        let now = self.tick();
        for old in moved {
            if let Some(mut node) = self.nodes.remove(&old) {
                let new_path = format!("{}{}", to, &old[from.len()..]);
                node.name = filename(&new_path).to_string();
                node.path = new_path.clone();
                if old == from {
                    node.modified = now;
                }
                self.nodes.insert(new_path, node);
            }
        }
        self.touch(&parent_path(from));
        self.touch(&parent_path(to));
    }
}
