//! A tiny utility for generating a device key pair.
//! Prints the private key as PKCS#8 PEM followed by the public key as SPKI PEM.

use clap::Parser;
use signing_crypto::{keys::KeyPair, SignatureAlgorithm};

/// Generate a device key pair.
#[derive(Debug, clap::Parser)]
struct Cli {
    /// The algorithm to generate the key pair for, `RSA` or `ECDSA`.
    algorithm: SignatureAlgorithm,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let Cli { algorithm } = Cli::parse();

    let key_pair = KeyPair::generate(algorithm)?;
    print!("{}", key_pair.private_key_pem()?.as_str());
    print!("{}", key_pair.public_key_pem()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_algorithm_tags() {
        let cli = Cli::try_parse_from(["signing-keygen", "ECDSA"]).unwrap();
        assert_eq!(cli.algorithm, SignatureAlgorithm::Ecdsa);

        let cli = Cli::try_parse_from(["signing-keygen", "RSA"]).unwrap();
        assert_eq!(cli.algorithm, SignatureAlgorithm::Rsa);
    }

    #[test]
    fn rejects_unsupported_algorithms() {
        assert!(Cli::try_parse_from(["signing-keygen", "AES"]).is_err());
        assert!(Cli::try_parse_from(["signing-keygen", "ecdsa"]).is_err());
        assert!(Cli::try_parse_from(["signing-keygen"]).is_err());
    }
}
