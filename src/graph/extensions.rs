use crate::graph::{
    drive::Drive,
    node::{GraphNode, Modulatable},
    pow::PowNode,
    scale::ScaleNode,
    through::Through,
};

pub trait NodeExt: GraphNode + Sized {
    fn through<F: GraphNode>(self, effect: F) -> Through<Self, F> {
        Through::new(self, effect)
    }

    /// Shape this node's output with `|x|^exponent`.
    fn pow(self, exponent: f32) -> Through<Self, PowNode> {
        Through::new(self, PowNode::new(exponent))
    }

    /// Map this node's output from [0, 1] into `[min, max]`.
    fn scale(self, min: f32, max: f32) -> Through<Self, ScaleNode> {
        Through::new(self, ScaleNode::new(min, max))
    }

    /// Let `control` set `param` on this node once per block.
    fn drive<C: GraphNode>(self, control: C, param: Self::Param) -> Drive<Self, C>
    where
        Self: Modulatable,
    {
        Drive::new(self, control, param)
    }
}

impl<T: GraphNode> NodeExt for T {}
