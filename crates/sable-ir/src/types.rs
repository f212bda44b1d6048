// SPDX-License-Identifier: (MIT OR Apache-2.0)

//! The IR type universe.

/// An IR type. Types form a shared DAG; cloning is structural.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    Void,
    /// Integer of arbitrary bit width.
    Int { width: usize },
    Float(FloatKind),
    Array {
        element: Box<Ty>,
        length: usize,
    },
    /// Struct type, possibly anonymous and/or opaque (`fields` is `None`
    /// exactly when the struct is opaque).
    Struct {
        name: Option<String>,
        fields: Option<Vec<Ty>>,
    },
    Function {
        params: Vec<Ty>,
        variadic: bool,
        ret: Box<Ty>,
    },
    /// Opaque pointer; only the address space is retained.
    Pointer { address_space: usize },
    /// SIMD vector. For scalable vectors `length` is the minimum count.
    Vector {
        element: Box<Ty>,
        fixed: bool,
        length: usize,
    },
    /// Target extension type.
    Extension {
        name: String,
        params: Vec<Ty>,
    },
    /// Legacy typed pointer.
    TypedPointer {
        pointee: Box<Ty>,
        address_space: usize,
    },
    Label,
    Token,
    Metadata,
    X86Amx,
    X86Mmx,
}

/// The floating-point flavors, each with a fixed width and spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatKind {
    Half,
    BFloat,
    Float,
    Double,
    X86Fp80,
    Fp128,
    PpcFp128,
}

impl FloatKind {
    pub fn width(self) -> usize {
        match self {
            FloatKind::Half | FloatKind::BFloat => 16,
            FloatKind::Float => 32,
            FloatKind::Double => 64,
            FloatKind::X86Fp80 => 80,
            FloatKind::Fp128 | FloatKind::PpcFp128 => 128,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FloatKind::Half => "half",
            FloatKind::BFloat => "bfloat",
            FloatKind::Float => "float",
            FloatKind::Double => "double",
            FloatKind::X86Fp80 => "x86_fp80",
            FloatKind::Fp128 => "fp128",
            FloatKind::PpcFp128 => "ppc_fp128",
        }
    }
}

impl Ty {
    pub fn int(width: usize) -> Self {
        Ty::Int { width }
    }

    /// Opaque pointer in the default address space.
    pub fn ptr() -> Self {
        Ty::Pointer { address_space: 0 }
    }

    pub fn ptr_in(address_space: usize) -> Self {
        Ty::Pointer { address_space }
    }

    pub fn array(element: Ty, length: usize) -> Self {
        Ty::Array {
            element: Box::new(element),
            length,
        }
    }

    /// Fixed-length vector.
    pub fn vector(element: Ty, length: usize) -> Self {
        Ty::Vector {
            element: Box::new(element),
            fixed: true,
            length,
        }
    }

    pub fn function(params: Vec<Ty>, ret: Ty) -> Self {
        Ty::Function {
            params,
            variadic: false,
            ret: Box::new(ret),
        }
    }

    pub fn named_struct(name: impl Into<String>, fields: Vec<Ty>) -> Self {
        Ty::Struct {
            name: Some(name.into()),
            fields: Some(fields),
        }
    }

    /// The address space behind a pointer-shaped type: plain pointers,
    /// typed pointers, and vectors of pointers.
    pub fn pointer_address_space(&self) -> Option<usize> {
        match self {
            Ty::Pointer { address_space } | Ty::TypedPointer { address_space, .. } => {
                Some(*address_space)
            }
            Ty::Vector { element, .. } => element.pointer_address_space(),
            _ => None,
        }
    }
}
