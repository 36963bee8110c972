//! Engine domain models

mod report;

pub use report::{
    AnalysisReport, CfgBlockDump, CfgDump, CfgSuccessor, ElementDump, ExecDump, ExecEdgeDump,
    ExecNodeDump, InvocationDump, LearnedAssociationDump, LearnedConstraintDump, MethodRef,
    ProgramPointDump, ProgramStateDump, StackValue, SvConstraints, SymbolBinding, YieldDump,
};
