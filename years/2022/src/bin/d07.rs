use lib::input::IStrError;
use lib::prelude::*;
use thiserror::Error;

lib::entry!("d07.txt", solve);

/// Directories at or below this size count towards the first answer.
const SMALL_DIRECTORY: u64 = 100_000;
/// Total capacity of the device.
const DISK_CAPACITY: u64 = 70_000_000;
/// Unused space required to install the update.
const UPDATE_SIZE: u64 = 30_000_000;

fn solve(input: IStr) -> Result<(u64, u64)> {
    let mut shell = Shell::new();

    for line in input.lines(Trim::Both).filter(|line| !line.is_empty()) {
        let span = line.index()..line.index() + line.len();
        let instruction = line.parse::<Instruction>()?;

        shell
            .apply(instruction)
            .map_err(|error| IStrError::boxed(span, error))?;
    }

    let mut fs = shell.into_fs();
    let sizes = fs.aggregate();
    let root = fs.get(FileSystem::ROOT).total;

    let part1 = small_total(&sizes, SMALL_DIRECTORY);
    let (id, part2) = smallest_sufficient(&sizes, root, DISK_CAPACITY, UPDATE_SIZE)?;

    info!(
        "{} directories, {root} used, deleting {} frees up {part2}",
        sizes.len(),
        fs.path(id)
    );

    Ok((part1, part2))
}

/// Errors raised while replaying a terminal log.
#[derive(Debug, Error)]
enum FsError {
    #[error("cannot move above the root directory")]
    NoParent,
    #[error("no directory `{name}` in `{parent}`")]
    NoSuchDirectory { name: String, parent: String },
    #[error("`{name}` in `{parent}` is already listed as something else")]
    DuplicateEntry { name: String, parent: String },
    #[error("no directory frees up at least {0}")]
    NoCandidate(u64),
}

/// Handle to an entry in a [FileSystem].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct EntryId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Directory,
    File,
}

#[derive(Debug)]
struct Entry<'a> {
    name: &'a str,
    kind: Kind,
    /// Size of the file itself, zero for directories.
    size: u64,
    /// Size including everything the entry contains. Zero until the file
    /// system has been aggregated.
    total: u64,
    parent: Option<EntryId>,
    children: Vec<EntryId>,
}

/// Arena holding every entry of a file system, with the root at
/// [FileSystem::ROOT].
#[derive(Debug)]
struct FileSystem<'a> {
    entries: Vec<Entry<'a>>,
}

impl<'a> FileSystem<'a> {
    const ROOT: EntryId = EntryId(0);

    fn new() -> Self {
        Self {
            entries: vec![Entry {
                name: "/",
                kind: Kind::Directory,
                size: 0,
                total: 0,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    fn get(&self, id: EntryId) -> &Entry<'a> {
        &self.entries[id.0]
    }

    /// Look up a child of `dir` by name.
    fn child(&self, dir: EntryId, name: &str) -> Option<EntryId> {
        self.get(dir)
            .children
            .iter()
            .copied()
            .find(|&id| self.get(id).name == name)
    }

    /// Insert an entry into `parent`.
    ///
    /// Inserting an entry identical to an existing one returns the existing
    /// handle, while a conflicting entry with the same name is an error.
    fn insert(
        &mut self,
        parent: EntryId,
        name: &'a str,
        kind: Kind,
        size: u64,
    ) -> Result<EntryId, FsError> {
        if let Some(existing) = self.child(parent, name) {
            let entry = self.get(existing);

            if entry.kind == kind && entry.size == size {
                return Ok(existing);
            }

            return Err(FsError::DuplicateEntry {
                name: name.to_owned(),
                parent: self.path(parent),
            });
        }

        let id = EntryId(self.entries.len());

        self.entries.push(Entry {
            name,
            kind,
            size,
            total: 0,
            parent: Some(parent),
            children: Vec::new(),
        });

        self.entries[parent.0].children.push(id);
        Ok(id)
    }

    /// Compute the total size of every entry, returning the directories in
    /// the order they were finalized.
    fn aggregate(&mut self) -> Vec<(EntryId, u64)> {
        let mut sizes = Vec::new();
        let mut stack = vec![(Self::ROOT, false)];

        while let Some((id, expanded)) = stack.pop() {
            let entry = &self.entries[id.0];

            if entry.kind == Kind::File {
                let size = entry.size;
                self.entries[id.0].total = size;
                continue;
            }

            if !expanded {
                stack.push((id, true));
                stack.extend(entry.children.iter().rev().map(|&child| (child, false)));
                continue;
            }

            let total = entry
                .children
                .iter()
                .map(|child| self.entries[child.0].total)
                .sum();

            self.entries[id.0].total = total;
            sizes.push((id, total));
        }

        sizes
    }

    /// Absolute path of an entry.
    fn path(&self, id: EntryId) -> String {
        let mut names = Vec::new();
        let mut current = id;

        while let Some(parent) = self.get(current).parent {
            names.push(self.get(current).name);
            current = parent;
        }

        let mut path = String::new();

        for name in names.iter().rev() {
            path.push('/');
            path.push_str(name);
        }

        if path.is_empty() {
            path.push('/');
        }

        path
    }
}

/// Replays a terminal log into a file system with a single cursor.
struct Shell<'a> {
    fs: FileSystem<'a>,
    cwd: EntryId,
}

impl<'a> Shell<'a> {
    fn new() -> Self {
        Self {
            fs: FileSystem::new(),
            cwd: FileSystem::ROOT,
        }
    }

    fn apply(&mut self, instruction: Instruction) -> Result<(), FsError> {
        match instruction {
            Instruction::List => {}
            Instruction::Cd(target) => {
                self.cwd = match target {
                    Target::Root => FileSystem::ROOT,
                    Target::Up => self.fs.get(self.cwd).parent.ok_or(FsError::NoParent)?,
                    Target::Child(name) => match self.fs.child(self.cwd, name) {
                        Some(id) if self.fs.get(id).kind == Kind::Directory => id,
                        _ => {
                            return Err(FsError::NoSuchDirectory {
                                name: name.to_owned(),
                                parent: self.fs.path(self.cwd),
                            })
                        }
                    },
                };

                debug!("cd {}", self.fs.path(self.cwd));
            }
            Instruction::Dir(name) => {
                self.fs.insert(self.cwd, name, Kind::Directory, 0)?;
            }
            Instruction::File(size, name) => {
                self.fs.insert(self.cwd, name, Kind::File, size)?;
            }
        }

        Ok(())
    }

    fn into_fs(self) -> FileSystem<'a> {
        self.fs
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Root,
    Up,
    Child(&'static str),
}

/// A single line of terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    List,
    Cd(Target),
    Dir(&'static str),
    File(u64, &'static str),
}

lib::from_input! {
    |line: &'static str| -> Instruction {
        let (head, rest) = line.split_once(' ').with_context(|| anyhow!("bad line `{line}`"))?;

        Ok(match (head, rest) {
            ("$", "ls") => Instruction::List,
            ("$", command) => match command.split_once(' ') {
                Some(("cd", "/")) => Instruction::Cd(Target::Root),
                Some(("cd", "..")) => Instruction::Cd(Target::Up),
                Some(("cd", name)) => Instruction::Cd(Target::Child(name)),
                _ => bail!("unsupported command `{command}`"),
            },
            ("dir", name) => Instruction::Dir(name),
            (size, name) => {
                let size = size
                    .parse()
                    .with_context(|| anyhow!("bad file size `{size}`"))?;
                Instruction::File(size, name)
            }
        })
    }
}

/// Sum of every directory size at or below `threshold`.
fn small_total(sizes: &[(EntryId, u64)], threshold: u64) -> u64 {
    sizes
        .iter()
        .map(|&(_, size)| size)
        .filter(|&size| size <= threshold)
        .sum()
}

/// The smallest directory which frees up enough space for `required` when
/// deleted.
fn smallest_sufficient(
    sizes: &[(EntryId, u64)],
    used: u64,
    capacity: u64,
    required: u64,
) -> Result<(EntryId, u64), FsError> {
    let deficit = required.saturating_sub(capacity.saturating_sub(used));

    let mut sorted = sizes.to_vec();
    sorted.sort_by_key(|&(_, size)| size);

    sorted
        .into_iter()
        .find(|&(_, size)| size >= deficit)
        .ok_or(FsError::NoCandidate(deficit))
}
