#![allow(dead_code)]

//! Hand-assembled minimal ELF64 image used as a parse fixture: one
//! executable load segment whose code carries both sentinel immediates and
//! an exit sequence, with no section headers (the shape of a stripped
//! fixture binary).

use fixtures::block::{FIRST_PATTERN, SECOND_PATTERN};

pub const ENTRY: u64 = 0x40_1000;

/// Offsets of the two sentinel immediates relative to [`ENTRY`]: each
/// `mov eax, imm32` places its immediate one byte after the opcode.
pub const FIRST_IMM_OFFSET: u64 = 1;
pub const SECOND_IMM_OFFSET: u64 = 6;

fn push_u16(bytes: &mut Vec<u8>, v: u16) {
    bytes.extend_from_slice(&v.to_le_bytes());
}

fn push_u32(bytes: &mut Vec<u8>, v: u32) {
    bytes.extend_from_slice(&v.to_le_bytes());
}

fn push_u64(bytes: &mut Vec<u8>, v: u64) {
    bytes.extend_from_slice(&v.to_le_bytes());
}

/// x86-64 body: both sentinel stores plus the exit(0) tail.
///
/// ```text
/// mov eax, 0xdeadbeef
/// mov eax, 0xbeefdead
/// mov eax, 60
/// xor edi, edi
/// syscall
/// ```
pub fn fixture_code() -> Vec<u8> {
    let mut code = Vec::new();
    code.push(0xb8);
    push_u32(&mut code, FIRST_PATTERN);
    code.push(0xb8);
    push_u32(&mut code, SECOND_PATTERN);
    code.push(0xb8);
    push_u32(&mut code, 60);
    code.extend_from_slice(&[0x31, 0xff]); // xor edi, edi
    code.extend_from_slice(&[0x0f, 0x05]); // syscall
    code
}

pub fn minimal_fixture_elf() -> Vec<u8> {
    let code = fixture_code();
    let code_offset = 64u64 + 56; // ELF header + one program header

    let mut bytes = Vec::new();

    // e_ident: ELF magic, 64-bit, little-endian, SysV
    bytes.extend_from_slice(&[0x7f, b'E', b'L', b'F', 2, 1, 1, 0]);
    bytes.extend_from_slice(&[0u8; 8]);
    push_u16(&mut bytes, 2); // e_type = ET_EXEC
    push_u16(&mut bytes, 62); // e_machine = EM_X86_64
    push_u32(&mut bytes, 1); // e_version
    push_u64(&mut bytes, ENTRY); // e_entry
    push_u64(&mut bytes, 64); // e_phoff
    push_u64(&mut bytes, 0); // e_shoff: no section headers
    push_u32(&mut bytes, 0); // e_flags
    push_u16(&mut bytes, 64); // e_ehsize
    push_u16(&mut bytes, 56); // e_phentsize
    push_u16(&mut bytes, 1); // e_phnum
    push_u16(&mut bytes, 64); // e_shentsize
    push_u16(&mut bytes, 0); // e_shnum
    push_u16(&mut bytes, 0); // e_shstrndx

    // PT_LOAD, R+X, covering exactly the code bytes
    push_u32(&mut bytes, 1); // p_type = PT_LOAD
    push_u32(&mut bytes, 5); // p_flags = PF_R | PF_X
    push_u64(&mut bytes, code_offset); // p_offset
    push_u64(&mut bytes, ENTRY); // p_vaddr
    push_u64(&mut bytes, ENTRY); // p_paddr
    push_u64(&mut bytes, code.len() as u64); // p_filesz
    push_u64(&mut bytes, code.len() as u64); // p_memsz
    push_u64(&mut bytes, 0x1000); // p_align

    assert_eq!(bytes.len() as u64, code_offset);
    bytes.extend_from_slice(&code);
    bytes
}
