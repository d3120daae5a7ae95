use goblin::elf::Elf;
use goblin::elf::header::{EM_X86_64, ET_DYN, ET_EXEC};
use goblin::elf::program_header::{PF_X, PT_LOAD};

/// Parsed view of a fixture binary: the header facts the checks need plus
/// the loadable segments with their file-backed bytes.
pub struct FixtureImage<'a> {
    pub entry: u64,
    pub machine: u16,
    pub e_type: u16,
    pub is_64: bool,
    pub segments: Vec<LoadSegment<'a>>,
    pub symbols: Vec<SymbolRef>,
}

/// One `PT_LOAD` segment.
pub struct LoadSegment<'a> {
    pub vaddr: u64,
    pub memsz: u64,
    pub executable: bool,
    pub data: &'a [u8],
}

/// Named symbol, when the binary still carries a symbol table.
pub struct SymbolRef {
    pub name: String,
    pub addr: u64,
}

impl<'a> LoadSegment<'a> {
    pub fn contains(&self, vaddr: u64) -> bool {
        vaddr >= self.vaddr && vaddr < self.vaddr + self.memsz
    }
}

impl<'a> FixtureImage<'a> {
    /// The load segment the entry point lands in, if any.
    pub fn entry_segment(&self) -> Option<&LoadSegment<'a>> {
        self.segments.iter().find(|s| s.contains(self.entry))
    }

    pub fn symbol(&self, name: &str) -> Option<&SymbolRef> {
        self.symbols.iter().find(|s| s.name == name)
    }

    /// A fixture must be a 64-bit x86-64 executable image. `ET_DYN` is
    /// accepted alongside `ET_EXEC` since static-PIE toolchains emit it.
    pub fn is_x86_64_executable(&self) -> bool {
        self.is_64 && self.machine == EM_X86_64 && matches!(self.e_type, ET_EXEC | ET_DYN)
    }
}

/// Parses a fixture image from raw bytes. Works on section-less binaries:
/// stripped fixtures carry only program headers, so everything here is
/// driven off `PT_LOAD` entries, with symbols collected only when present.
pub fn parse_fixture_from_bytes<'a>(
    bytes: &'a [u8],
) -> Result<FixtureImage<'a>, goblin::error::Error> {
    let elf = Elf::parse(bytes)?;

    let mut segments = Vec::new();
    for ph in elf.program_headers.iter() {
        if ph.p_type != PT_LOAD {
            continue;
        }
        let offset = ph.p_offset as usize;
        let filesz = ph.p_filesz as usize;
        if offset + filesz <= bytes.len() {
            segments.push(LoadSegment {
                vaddr: ph.p_vaddr,
                memsz: ph.p_memsz,
                executable: ph.p_flags & PF_X != 0,
                data: &bytes[offset..offset + filesz],
            });
        }
    }

    let mut symbols = Vec::new();
    for sym in elf.syms.iter() {
        if let Some(name) = elf.strtab.get_at(sym.st_name) {
            if !name.is_empty() {
                symbols.push(SymbolRef {
                    name: name.to_string(),
                    addr: sym.st_value,
                });
            }
        }
    }

    Ok(FixtureImage {
        entry: elf.header.e_entry,
        machine: elf.header.e_machine,
        e_type: elf.header.e_type,
        is_64: elf.is_64,
        segments,
        symbols,
    })
}
