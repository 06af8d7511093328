use super::{ArgumentStatus, DisputeNode, DisputeRole, ProvenanceInfo, VerdictReason};
use crate::{
    aa::{AAFramework, Argument, LabelType},
    solvers::Extension,
    utils::AttackIndex,
};
use log::debug;

/// Builds the [ProvenanceInfo] of the arguments of a solved framework.
///
/// The dispute tree of an argument is built as follows.
/// The root is the argument itself, as a proponent.
/// The children of a proponent node are all its attackers, as opponents.
/// The children of an opponent node are those of its attackers that belong to at least one extension, as proponents;
/// the arguments belonging to at least one extension form the winning set.
/// A node whose argument already appears on the path from the root is circular and is not expanded.
///
/// The number of nodes of each dispute tree is bounded.
/// When the bound is reached, the nodes left with unexplored attackers are marked as truncated.
pub struct ProvenanceResolver<'a, 'i, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    index: &'i AttackIndex,
    winning: Vec<bool>,
    max_tree_nodes: usize,
}

impl<'a, 'i, T> ProvenanceResolver<'a, 'i, T>
where
    T: LabelType,
{
    /// Builds a resolver given the framework, its index, its extensions and the maximal size of dispute trees.
    pub fn new(
        af: &'a AAFramework<T>,
        index: &'i AttackIndex,
        extensions: &[Extension],
        max_tree_nodes: usize,
    ) -> Self {
        let mut winning = vec![false; index.len()];
        extensions
            .iter()
            .flat_map(|e| e.members().iter())
            .for_each(|m| winning[*m] = true);
        Self {
            af,
            index,
            winning,
            max_tree_nodes,
        }
    }

    /// Computes the provenance of the argument at the given position, which received the given verdict.
    pub fn resolve(
        &self,
        position: usize,
        (status, reason): (ArgumentStatus, VerdictReason),
    ) -> ProvenanceInfo<'a, T> {
        let attackers = self.index.attackers_of(position);
        let mut defenders = attackers
            .iter()
            .flat_map(|a| self.index.attackers_of(*a).iter().copied())
            .collect::<Vec<usize>>();
        sort_positions(&mut defenders);
        let mut on_path = vec![false; self.index.len()];
        let mut n_nodes = 0;
        let dispute_tree =
            self.build_node(position, DisputeRole::Proponent, &mut on_path, &mut n_nodes);
        if n_nodes >= self.max_tree_nodes {
            debug!(
                "dispute tree of {} reached the limit of {} nodes",
                self.argument_at(position).label(),
                self.max_tree_nodes
            );
        }
        let mut primary = dispute_tree
            .children
            .iter()
            .flat_map(|c| c.children.iter().map(|d| d.argument))
            .collect::<Vec<&Argument<T>>>();
        sort_arguments(&mut primary);
        let mut actual = dispute_tree
            .children
            .iter()
            .flat_map(|c| c.iter_arguments())
            .collect::<Vec<&Argument<T>>>();
        sort_arguments(&mut actual);
        ProvenanceInfo {
            argument: self.argument_at(position),
            status,
            reason,
            attackers: self.arguments_at(attackers),
            defenders: self.arguments_at(&defenders),
            primary_provenance: primary,
            actual_provenance: actual,
            dispute_tree,
        }
    }

    fn build_node(
        &self,
        position: usize,
        role: DisputeRole,
        on_path: &mut [bool],
        n_nodes: &mut usize,
    ) -> DisputeNode<'a, T> {
        *n_nodes += 1;
        let mut node = DisputeNode {
            argument: self.argument_at(position),
            role,
            circular: false,
            truncated: false,
            children: vec![],
        };
        if on_path[position] {
            node.circular = true;
            return node;
        }
        on_path[position] = true;
        for attacker in self.index.attackers_of(position) {
            if role == DisputeRole::Opponent && !self.winning[*attacker] {
                continue;
            }
            if *n_nodes >= self.max_tree_nodes {
                node.truncated = true;
                break;
            }
            let child = self.build_node(*attacker, role.opposite(), on_path, n_nodes);
            node.children.push(child);
        }
        on_path[position] = false;
        node
    }

    fn argument_at(&self, position: usize) -> &'a Argument<T> {
        self.af
            .argument_set()
            .get_argument_by_id(self.index.argument_id(position))
    }

    fn arguments_at(&self, positions: &[usize]) -> Vec<&'a Argument<T>> {
        positions.iter().map(|p| self.argument_at(*p)).collect()
    }
}

fn sort_positions(positions: &mut Vec<usize>) {
    positions.sort_unstable();
    positions.dedup();
}

fn sort_arguments<T>(arguments: &mut Vec<&Argument<T>>)
where
    T: LabelType,
{
    arguments.sort_unstable_by(|a, b| a.label().cmp(b.label()));
    arguments.dedup_by(|a, b| a.id() == b.id());
}
