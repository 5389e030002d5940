//! The signature device.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use signing_crypto::{
    AlgorithmSigner, EncodingError, PublicKeyProvider, SignatureAlgorithm, Signer, Verifier,
};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::{sequence::Sequence, CreateError, SignError};

/// A device holding a key pair and the state of its signature chain.
pub struct SignatureDevice<S = AlgorithmSigner> {
    /// The device identifier.
    id: Uuid,
    /// The optional display name.
    label: Option<String>,
    /// The algorithm the signer implements.
    algorithm: SignatureAlgorithm,
    /// The signer bound to the device key pair.
    signer: S,
    /// The chain state, to be hidden behind the mutex to ensure we don't have
    /// access to it unless we lock the mutex.
    chain: Mutex<Chain>,
}

/// The mutable part of the device.
struct Chain {
    /// The signature counter.
    sequence: Sequence,
    /// The base64 encoded last signature, or the chain anchor.
    last_signature: String,
}

/// The outcome of a successful sign operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignResult {
    /// The base64 encoded signature.
    pub signature: String,
    /// The exact string that was signed.
    pub secured_payload: String,
}

/// A consistent view of the chain state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainState {
    /// How many signatures the device has produced.
    pub signature_counter: u64,
    /// The signature the next sign operation will be chained to.
    pub last_signature: String,
}

impl SignatureDevice {
    /// Create a device bound to a freshly generated key pair of the algorithm
    /// named by the tag.
    pub fn new(id: Uuid, label: Option<String>, algorithm: &str) -> Result<Self, CreateError> {
        if id.is_nil() {
            return Err(CreateError::InvalidId);
        }
        let algorithm: SignatureAlgorithm = algorithm.parse()?;
        let signer = AlgorithmSigner::generate(algorithm)?;
        Self::with_signer(id, label, algorithm, signer)
    }
}

impl<S> SignatureDevice<S> {
    /// Create a device around an existing signer.
    pub fn with_signer(
        id: Uuid,
        label: Option<String>,
        algorithm: SignatureAlgorithm,
        signer: S,
    ) -> Result<Self, CreateError> {
        if id.is_nil() {
            return Err(CreateError::InvalidId);
        }
        Ok(Self {
            id,
            label,
            algorithm,
            signer,
            chain: Mutex::new(Chain {
                sequence: Sequence::new(0),
                last_signature: chain_anchor(id),
            }),
        })
    }

    /// The device identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The display name of the device.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The signature algorithm of the device.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    /// The number of signatures produced so far.
    pub async fn signature_counter(&self) -> u64 {
        self.chain.lock().await.sequence.get()
    }

    /// Read the counter and the last signature at once.
    pub async fn chain_state(&self) -> ChainState {
        let chain = self.chain.lock().await;
        ChainState {
            signature_counter: chain.sequence.get(),
            last_signature: chain.last_signature.clone(),
        }
    }
}

impl<S> SignatureDevice<S>
where
    S: Signer,
    S::Error: std::error::Error + 'static,
{
    /// Sign the data, chaining the signature to the previous one.
    ///
    /// Concurrent calls on the same device are serialized; each one observes
    /// the counter and last signature left by the previous call.
    pub async fn sign(&self, data: &str) -> Result<SignResult, SignError<S::Error>> {
        let mut chain = self.chain.lock().await;
        self.sign_locked(&mut chain, data)
    }

    /// Same as [`Self::sign`], for callers running outside of the async
    /// context, like the blocking thread pool.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context.
    pub fn blocking_sign(&self, data: &str) -> Result<SignResult, SignError<S::Error>> {
        let mut chain = self.chain.blocking_lock();
        self.sign_locked(&mut chain, data)
    }

    /// Sign under the held lock, committing the chain only on success.
    fn sign_locked(
        &self,
        chain: &mut Chain,
        data: &str,
    ) -> Result<SignResult, SignError<S::Error>> {
        let secured_payload = secured_payload(chain.sequence.get(), data, &chain.last_signature);
        let raw_signature = self
            .signer
            .sign(&secured_payload)
            .map_err(SignError::Signing)?;
        let signature = BASE64.encode(raw_signature);

        chain.last_signature.clone_from(&signature);
        chain.sequence.inc();

        Ok(SignResult {
            signature,
            secured_payload,
        })
    }
}

impl<S: Verifier> SignatureDevice<S> {
    /// Check a base64 encoded signature against the secured payload it was
    /// produced over.
    pub fn verify(&self, secured_payload: &str, signature: &str) -> bool {
        match BASE64.decode(signature) {
            Ok(raw_signature) => self.signer.verify(secured_payload, raw_signature),
            Err(_) => false,
        }
    }
}

impl<S: PublicKeyProvider> SignatureDevice<S> {
    /// The device public key as SPKI PEM.
    pub fn public_key_pem(&self) -> Result<String, EncodingError> {
        self.signer.public_key_pem()
    }
}

impl<S> std::fmt::Debug for SignatureDevice<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureDevice")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// The last signature of a device that has not signed anything yet.
pub fn chain_anchor(id: Uuid) -> String {
    BASE64.encode(id.to_string())
}

/// Build the string that is actually signed.
///
/// Underscores in `data` are not escaped.
pub fn secured_payload(signature_counter: u64, data: &str, last_signature: &str) -> String {
    format!("{signature_counter}_{data}_{last_signature}")
}
