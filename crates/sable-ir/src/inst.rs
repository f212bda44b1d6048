// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! Instructions and their opcode vocabularies.

use crate::constant::Constant;
use crate::function::{BlockId, InstId};
use crate::types::Ty;
use crate::value::Value;

/// An instruction: result type, optional SSA name, and payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub id: InstId,
    pub name: Option<String>,
    pub ty: Ty,
    pub kind: InstKind,
}

/// A module of inline assembly appearing at a call site.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineAsm {
    pub signature: Ty,
    pub code: String,
    pub constraints: String,
}

/// What a call or invoke targets.
#[derive(Debug, Clone, PartialEq)]
pub enum Callee {
    Asm(InlineAsm),
    Value(Value),
}

/// One incoming edge of a phi. Pairing is by block identity; the order of
/// entries need not match the block's predecessor order.
#[derive(Debug, Clone, PartialEq)]
pub struct PhiIncoming {
    pub block: BlockId,
    pub value: Value,
}

/// One non-default case of a switch.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchArm {
    pub value: Constant,
    pub target: BlockId,
}

/// The exhaustive instruction payload sum. Terminators are included;
/// [`InstKind::is_terminator`] distinguishes them.
#[derive(Debug, Clone, PartialEq)]
pub enum InstKind {
    // memory
    Alloca {
        allocated: Ty,
        size: Option<Value>,
    },
    Load {
        pointer: Value,
        ordering: Ordering,
    },
    Store {
        pointer: Value,
        value: Value,
        ordering: Ordering,
    },
    VaArg {
        pointer: Value,
    },
    // calls; the intrinsic/asm/direct/indirect split happens at export
    Call {
        callee: Callee,
        signature: Ty,
        args: Vec<Value>,
    },
    // unary, binary, comparison, cast
    Unary {
        op: UnaryOp,
        operand: Value,
    },
    Binary {
        op: BinOp,
        lhs: Value,
        rhs: Value,
    },
    Compare {
        predicate: Predicate,
        lhs: Value,
        rhs: Value,
    },
    Cast {
        op: CastOp,
        operand: Value,
    },
    Freeze {
        operand: Value,
    },
    // pointer arithmetic
    Gep {
        src_pointee: Ty,
        dst_pointee: Ty,
        pointer: Value,
        indices: Vec<Value>,
    },
    // choice
    Phi {
        incoming: Vec<PhiIncoming>,
    },
    Select {
        cond: Value,
        then_value: Value,
        else_value: Value,
    },
    // aggregates
    ExtractValue {
        aggregate: Value,
        indices: Vec<usize>,
    },
    InsertValue {
        aggregate: Value,
        value: Value,
        indices: Vec<usize>,
    },
    ExtractElement {
        vector: Value,
        slot: Value,
    },
    InsertElement {
        vector: Value,
        value: Value,
        slot: Value,
    },
    Shuffle {
        lhs: Value,
        rhs: Value,
        mask: Vec<i32>,
    },
    // concurrency
    Fence {
        ordering: Ordering,
        scope: SyncScope,
    },
    CmpXchg {
        pointer: Value,
        expected: Value,
        replacement: Value,
        ordering_success: Ordering,
        ordering_failure: Ordering,
        scope: SyncScope,
    },
    AtomicRmw {
        op: RmwOp,
        pointer: Value,
        value: Value,
        ordering: Ordering,
        scope: SyncScope,
    },
    // exception handling, non-terminator
    LandingPad {
        clauses: Vec<Constant>,
        is_cleanup: bool,
    },
    CatchPad,
    CleanupPad,
    // terminators
    Return {
        value: Option<Value>,
    },
    Branch {
        cond: Option<Value>,
        targets: Vec<BlockId>,
    },
    Switch {
        cond: Value,
        arms: Vec<SwitchArm>,
        default: Option<BlockId>,
    },
    IndirectJump {
        address: Value,
        targets: Vec<BlockId>,
    },
    Invoke {
        callee: Callee,
        signature: Ty,
        args: Vec<Value>,
        normal: BlockId,
        unwind: BlockId,
    },
    Resume {
        value: Value,
    },
    Unreachable,
    // exception handling, terminator
    CatchSwitch,
    CatchReturn,
    CleanupReturn,
    CallBranch,
}

impl InstKind {
    pub fn is_terminator(&self) -> bool {
        matches!(
            self,
            InstKind::Return { .. }
                | InstKind::Branch { .. }
                | InstKind::Switch { .. }
                | InstKind::IndirectJump { .. }
                | InstKind::Invoke { .. }
                | InstKind::Resume { .. }
                | InstKind::Unreachable
                | InstKind::CatchSwitch
                | InstKind::CatchReturn
                | InstKind::CleanupReturn
                | InstKind::CallBranch
        )
    }
}

/// Unary opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    FNeg,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::FNeg => "fneg",
        }
    }
}

/// Binary opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    FAdd,
    Sub,
    FSub,
    Mul,
    FMul,
    UDiv,
    SDiv,
    FDiv,
    URem,
    SRem,
    FRem,
    Shl,
    LShr,
    AShr,
    And,
    Or,
    Xor,
}

impl BinOp {
    pub fn as_str(self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::FAdd => "fadd",
            BinOp::Sub => "sub",
            BinOp::FSub => "fsub",
            BinOp::Mul => "mul",
            BinOp::FMul => "fmul",
            BinOp::UDiv => "udiv",
            BinOp::SDiv => "sdiv",
            BinOp::FDiv => "fdiv",
            BinOp::URem => "urem",
            BinOp::SRem => "srem",
            BinOp::FRem => "frem",
            BinOp::Shl => "shl",
            BinOp::LShr => "lshr",
            BinOp::AShr => "ashr",
            BinOp::And => "and",
            BinOp::Or => "or",
            BinOp::Xor => "xor",
        }
    }
}

/// Comparison predicates, two-letter-family form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    FFalse,
    FOeq,
    FOgt,
    FOge,
    FOlt,
    FOle,
    FOne,
    FOrd,
    FUno,
    FUeq,
    FUgt,
    FUge,
    FUlt,
    FUle,
    FUne,
    FTrue,
    IEq,
    INe,
    IUgt,
    IUge,
    IUlt,
    IUle,
    ISgt,
    ISge,
    ISlt,
    ISle,
}

impl Predicate {
    pub fn as_str(self) -> &'static str {
        match self {
            Predicate::FFalse => "f_false",
            Predicate::FOeq => "f_oeq",
            Predicate::FOgt => "f_ogt",
            Predicate::FOge => "f_oge",
            Predicate::FOlt => "f_olt",
            Predicate::FOle => "f_ole",
            Predicate::FOne => "f_one",
            Predicate::FOrd => "f_ord",
            Predicate::FUno => "f_uno",
            Predicate::FUeq => "f_ueq",
            Predicate::FUgt => "f_ugt",
            Predicate::FUge => "f_uge",
            Predicate::FUlt => "f_ult",
            Predicate::FUle => "f_ule",
            Predicate::FUne => "f_une",
            Predicate::FTrue => "f_true",
            Predicate::IEq => "i_eq",
            Predicate::INe => "i_ne",
            Predicate::IUgt => "i_ugt",
            Predicate::IUge => "i_uge",
            Predicate::IUlt => "i_ult",
            Predicate::IUle => "i_ule",
            Predicate::ISgt => "i_sgt",
            Predicate::ISge => "i_sge",
            Predicate::ISlt => "i_slt",
            Predicate::ISle => "i_sle",
        }
    }
}

/// Cast opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastOp {
    Trunc,
    ZExt,
    SExt,
    FpToUi,
    FpToSi,
    UiToFp,
    SiToFp,
    FpTrunc,
    FpExt,
    PtrToInt,
    IntToPtr,
    BitCast,
    AddrSpaceCast,
}

impl CastOp {
    pub fn as_str(self) -> &'static str {
        match self {
            CastOp::Trunc => "trunc",
            CastOp::ZExt => "zext",
            CastOp::SExt => "sext",
            CastOp::FpToUi => "fp_to_ui",
            CastOp::FpToSi => "fp_to_si",
            CastOp::UiToFp => "ui_to_fp",
            CastOp::SiToFp => "si_to_fp",
            CastOp::FpTrunc => "fp_trunc",
            CastOp::FpExt => "fp_ext",
            CastOp::PtrToInt => "ptr_to_int",
            CastOp::IntToPtr => "int_to_ptr",
            CastOp::BitCast => "bitcast",
            CastOp::AddrSpaceCast => "address_space_cast",
        }
    }
}

/// Atomic read-modify-write opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RmwOp {
    Xchg,
    Add,
    FAdd,
    Sub,
    FSub,
    UIncWrap,
    UDecWrap,
    Max,
    UMax,
    FMax,
    Min,
    UMin,
    FMin,
    And,
    Or,
    Xor,
    Nand,
}

impl RmwOp {
    pub fn as_str(self) -> &'static str {
        match self {
            RmwOp::Xchg => "xchg",
            RmwOp::Add => "add",
            RmwOp::FAdd => "fadd",
            RmwOp::Sub => "sub",
            RmwOp::FSub => "fsub",
            RmwOp::UIncWrap => "uinc",
            RmwOp::UDecWrap => "udec",
            RmwOp::Max => "max",
            RmwOp::UMax => "umax",
            RmwOp::FMax => "fmax",
            RmwOp::Min => "min",
            RmwOp::UMin => "umin",
            RmwOp::FMin => "fmin",
            RmwOp::And => "and",
            RmwOp::Or => "or",
            RmwOp::Xor => "xor",
            RmwOp::Nand => "nand",
        }
    }
}

/// Atomic memory orderings, canonical textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ordering {
    NotAtomic,
    Unordered,
    Monotonic,
    Acquire,
    Release,
    AcqRel,
    SeqCst,
}

impl Ordering {
    pub fn as_str(self) -> &'static str {
        match self {
            Ordering::NotAtomic => "not_atomic",
            Ordering::Unordered => "unordered",
            Ordering::Monotonic => "monotonic",
            Ordering::Acquire => "acquire",
            Ordering::Release => "release",
            Ordering::AcqRel => "acq_rel",
            Ordering::SeqCst => "seq_cst",
        }
    }
}

/// Scope at which an atomic operation synchronizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncScope {
    System,
    SingleThread,
    /// A target-defined scope the exporter does not interpret.
    Other,
}

impl SyncScope {
    pub fn as_str(self) -> &'static str {
        match self {
            SyncScope::System => "system",
            SyncScope::SingleThread => "thread",
            SyncScope::Other => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminators_are_flagged() {
        assert!(InstKind::Unreachable.is_terminator());
        assert!(InstKind::Return { value: None }.is_terminator());
        assert!(InstKind::CatchSwitch.is_terminator());
        assert!(!InstKind::CatchPad.is_terminator());
        assert!(!InstKind::Freeze {
            operand: Value::Metadata
        }
        .is_terminator());
    }

    #[test]
    fn ordering_spellings() {
        assert_eq!(Ordering::AcqRel.as_str(), "acq_rel");
        assert_eq!(Ordering::SeqCst.as_str(), "seq_cst");
        assert_eq!(Ordering::NotAtomic.as_str(), "not_atomic");
    }
}
