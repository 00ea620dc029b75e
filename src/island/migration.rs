//! Ring migration.
//!
//! Each island picks `num_migrants` distinct slots with its own random source,
//! sends copies of the individuals in those slots to the next island of the
//! ring and overwrites the same slots with the individuals received from the
//! previous island. The sequential and the threaded exchange follow the same
//! contract and draw the same random numbers, so both give identical results.

use std::sync::mpsc::{Receiver, SyncSender};

use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::evolution::{Challenge, Population};
use crate::individual::Individual;

/// A batch of migrants travelling between neighbouring islands.
pub(crate) type Migrants = Vec<Individual>;

/// Picks the slots to vacate and copies their occupants.
fn emigrate<C>(island: &mut Population<C>, num_migrants: usize) -> Result<(Vec<usize>, Migrants)>
where
    C: Challenge,
{
    if num_migrants > island.len() {
        return Err(GeneticError::Configuration(format!(
            "Cannot send {} migrants from an island of {} individuals",
            num_migrants,
            island.len()
        )));
    }

    let len = island.len();
    let slots = island.rng_mut().sample_indices(len, num_migrants);
    let emigrants = slots.iter().map(|&slot| island[slot].clone()).collect();

    Ok((slots, emigrants))
}

/// Splices received migrants into the vacated slots.
fn immigrate<C>(island: &mut Population<C>, slots: &[usize], immigrants: Migrants) -> Result<()> {
    if immigrants.len() != slots.len() {
        return Err(GeneticError::Migration(format!(
            "Expected {} migrants, received {}",
            slots.len(),
            immigrants.len()
        )));
    }

    let individuals = island.individuals_mut();
    for (&slot, immigrant) in slots.iter().zip(immigrants) {
        individuals[slot] = immigrant;
    }

    Ok(())
}

/// Runs one migration round over all islands in the calling thread.
///
/// Island `i` receives the migrants of island `i - 1` (the first island
/// receives from the last).
pub(crate) fn ring_migrate<C>(islands: &mut [Population<C>], num_migrants: usize) -> Result<()>
where
    C: Challenge,
{
    let (slots, mut batches): (Vec<_>, Vec<_>) = islands
        .iter_mut()
        .map(|island| emigrate(island, num_migrants))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .unzip();

    batches.rotate_right(1);

    for ((island, slots), batch) in islands.iter_mut().zip(&slots).zip(batches) {
        immigrate(island, slots, batch)?;
    }

    trace!(islands = islands.len(), num_migrants, "Ring migration complete");
    Ok(())
}

/// Runs one migration round for a single island running in its own thread.
///
/// Sends to the next island, then blocks until the previous island's migrants
/// arrive. There is no timeout: every island of the ring must reach the same
/// migration round.
pub(crate) fn exchange<C>(
    island: &mut Population<C>,
    num_migrants: usize,
    outbox: &SyncSender<Migrants>,
    inbox: &Receiver<Migrants>,
) -> Result<()>
where
    C: Challenge,
{
    let (slots, emigrants) = emigrate(island, num_migrants)?;

    outbox
        .send(emigrants)
        .map_err(|_| GeneticError::Migration("Next island stopped receiving migrants".to_string()))?;

    let immigrants = inbox
        .recv()
        .map_err(|_| GeneticError::Migration("Previous island stopped sending migrants".to_string()))?;

    immigrate(island, &slots, immigrants)
}
