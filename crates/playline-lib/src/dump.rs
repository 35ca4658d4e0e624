//! Human-readable listing of a compiled program.
//!
//! Layout:
//!
//! ```text
//! [initial_values]
//! $gold = 10
//!
//! [nodes]
//! Start:
//!   ; title: Start
//!   ; #intro
//!   L0:
//!     0 RunLine "line:1" 0  ; "Hi"
//!     1 Stop
//! ```
//!
//! Line IDs passed to `RunLine` and `AddOption` are resolved through the
//! string table when present.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use indexmap::IndexMap;
use playline_core::{Colors, Flatten, Instruction, Node, OpCode, Operand, Program, StringTableEntry};

/// Generate the listing for `program`.
pub fn dump(
    program: &Program,
    strings: &IndexMap<String, StringTableEntry>,
    colors: Colors,
) -> String {
    let mut out = String::new();
    let ctx = DumpContext { strings, colors };

    if !program.initial_values.is_empty() {
        dump_initial_values(&mut out, program, &ctx);
        out.push('\n');
    }
    dump_nodes(&mut out, program, &ctx);

    out
}

struct DumpContext<'a> {
    strings: &'a IndexMap<String, StringTableEntry>,
    colors: Colors,
}

fn width_for_count(count: usize) -> usize {
    if count <= 1 {
        1
    } else {
        ((count - 1) as f64).log10().floor() as usize + 1
    }
}

fn dump_initial_values(out: &mut String, program: &Program, ctx: &DumpContext) {
    let c = &ctx.colors;

    writeln!(out, "{}[initial_values]{}", c.blue, c.reset).unwrap();
    for (name, value) in &program.initial_values {
        out.push_str(name);
        out.push_str(" =");
        write_operand(out, value, ctx);
        out.push('\n');
    }
}

fn dump_nodes(out: &mut String, program: &Program, ctx: &DumpContext) {
    let c = &ctx.colors;

    writeln!(out, "{}[nodes]{}", c.blue, c.reset).unwrap();
    for (i, (name, node)) in program.nodes.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        writeln!(out, "{}{name}{}:", c.blue, c.reset).unwrap();
        dump_node(out, node, ctx);
    }
}

fn dump_node(out: &mut String, node: &Node, ctx: &DumpContext) {
    let c = &ctx.colors;
    let width = width_for_count(node.instructions.len());

    for header in &node.headers {
        writeln!(out, "  {}; {}: {}{}", c.dim, header.key, header.value, c.reset).unwrap();
    }
    if !node.tags.is_empty() {
        let tags: Vec<_> = node.tags.iter().map(|t| format!("#{t}")).collect();
        writeln!(out, "  {}; {}{}", c.dim, tags.join(" "), c.reset).unwrap();
    }

    // Several labels may share a target; keep declaration order among them.
    let mut labels: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for (label, &target) in &node.labels {
        let target = usize::try_from(target).unwrap_or(0);
        labels.entry(target).or_default().push(label);
    }

    for (i, instruction) in node.instructions.iter().enumerate() {
        for label in labels.remove(&i).unwrap_or_default() {
            writeln!(out, "  {}{label}{}:", c.dim, c.reset).unwrap();
        }
        write!(out, "    {}{i:0width$}{} ", c.dim, c.reset).unwrap();
        write_instruction(out, instruction, ctx);
        out.push('\n');
    }

    // Labels pointing past the last instruction.
    for label in labels.into_values().flatten() {
        writeln!(out, "  {}{label}{}:", c.dim, c.reset).unwrap();
    }
}

fn write_instruction(out: &mut String, instruction: &Instruction, ctx: &DumpContext) {
    out.push_str(instruction.opcode.name());
    for operand in &instruction.operands {
        write_operand(out, operand, ctx);
    }

    let line_id = match instruction.opcode {
        OpCode::RunLine | OpCode::AddOption => {
            instruction.operands.first().and_then(Operand::as_str)
        }
        _ => None,
    };
    if let Some(entry) = line_id.and_then(|id| ctx.strings.get(id)) {
        let c = &ctx.colors;
        write!(out, "  {}; {:?}{}", c.dim, entry.text, c.reset).unwrap();
    }
}

fn write_operand(out: &mut String, operand: &Operand, ctx: &DumpContext) {
    let c = &ctx.colors;
    let color = match operand {
        Operand::String(_) => c.green,
        _ => "",
    };
    let reset = if color.is_empty() { "" } else { c.reset };
    write!(out, " {color}{}{reset}", operand.flatten()).unwrap();
}
