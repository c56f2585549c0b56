#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use phpdoc_strip::{Console, LocalFs, Storage};

pub const COMMENTED: &str = "<?php\n// drop me\necho 1;\n/** keep */\n";
pub const STRIPPED: &str = "<?php\necho 1;\n/** keep */\n";

/// Write `files` (relative path, contents) under `root`.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, contents).expect("write fixture");
    }
}

/// Write `count` commented PHP files named `f00.php`, `f01.php`, ...
pub fn write_php_files(root: &Path, count: usize) {
    for i in 0..count {
        fs::write(root.join(format!("f{i:02}.php")), COMMENTED).expect("write fixture");
    }
}

/// Every regular file below `root` with its bytes.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut out = BTreeMap::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir).expect("read dir") {
            let path = entry.expect("dir entry").path();
            if path.is_dir() {
                stack.push(path);
            } else {
                let bytes = fs::read(&path).expect("read file");
                out.insert(path, bytes);
            }
        }
    }
    out
}

/// Console that answers prompts from a script and records everything.
#[derive(Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub lines: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| (*a).to_string()).collect(),
            ..Self::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn prompt(&mut self, question: &str) -> io::Result<String> {
        self.prompts.push(question.to_string());
        Ok(self.answers.pop_front().unwrap_or_default())
    }
}

/// Local storage that fails the write to any path ending in `fail_on`.
pub struct FailingStorage {
    pub fail_on: &'static str,
    pub reads: RefCell<Vec<PathBuf>>,
}

impl FailingStorage {
    pub fn new(fail_on: &'static str) -> Self {
        Self {
            fail_on,
            reads: RefCell::new(Vec::new()),
        }
    }
}

impl Storage for FailingStorage {
    fn read(&self, path: &Path) -> io::Result<String> {
        self.reads.borrow_mut().push(path.to_path_buf());
        LocalFs.read(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        if path.ends_with(self.fail_on) {
            return Err(io::Error::other("disk full"));
        }
        LocalFs.write(path, contents)
    }
}
