//! Default label table for the Sea of Thieves ESP framework.

use std::path::PathBuf;

use super::{LookupSpec, OffsetConfig};

const ATHENA: &str = "athena";
const ENGINE: &str = "engine";
const ATHENA_AI: &str = "athena_ai";
const ENGINE_STRUCTS: &str = "engine_structs";
const ATHENA_STRUCTS: &str = "athena_structs";

pub const DEFAULT_SDK_DIR: &str = "SDKs/JSON-SDK";
pub const DEFAULT_OUTPUT: &str = "offsets.json";

const DOCUMENTS: &[(&str, &str)] = &[
    (ATHENA, "Athena_Classes.json"),
    (ENGINE, "Engine_Classes.json"),
    (ATHENA_AI, "AthenaAI_Classes.json"),
    (ENGINE_STRUCTS, "Engine_Structs.json"),
    (ATHENA_STRUCTS, "Athena_structs.json"),
];

// Not present in the SDK dump, kept as known values
const LITERALS: &[(&str, u64)] = &[
    ("Actor.actorId", 24),
    ("SceneComponent.ActorCoordinates", 0x12c),
];

const SIZES: &[(&str, &str, &str)] = &[("Crew.Size", ATHENA_STRUCTS, "Crew")];

/// (label, document, owner, field)
const OFFSETS: &[(&str, &str, &str, &str)] = &[
    ("Actor.rootComponent", ENGINE, "Actor", "RootComponent"),
    ("CameraCacheEntry.MinimalViewInfo", ENGINE_STRUCTS, "CameraCacheEntry", "POV"),
    ("Crew.Players", ATHENA_STRUCTS, "Crew", "Players"),
    ("GameInstance.LocalPlayers", ENGINE, "GameInstance", "LocalPlayers"),
    ("LocalPlayer.PlayerController", ENGINE, "Player", "PlayerController"),
    ("PlayerCameraManager.CameraCache", ENGINE, "PlayerCameraManager", "CameraCache"),
    ("PlayerController.CameraManager", ENGINE, "PlayerController", "PlayerCameraManager"),
    ("PlayerState.PlayerName", ENGINE, "PlayerState", "PlayerName"),
    ("World.OwningGameInstance", ENGINE, "World", "OwningGameInstance"),
    ("World.PersistentLevel", ENGINE, "World", "PersistentLevel"),
    ("APlayerController.Pawn", ENGINE, "Controller", "Pawn"),
    ("APlayerController.Character", ENGINE, "Controller", "Character"),
    ("APlayerController.CameraManager", ENGINE, "PlayerController", "CameraManager"),
    ("APlayerController.ControlRotation", ENGINE, "PlayerController", "ControlRotation"),
    ("AActor.PlayerState", ENGINE, "Pawn", "PlayerState"),
    ("AActor.WieldedItemComponent", ATHENA, "AthenaCharacter", "WieldedItemComponent"),
    ("AActor.HealthComponent", ATHENA, "AthenaCharacter", "HealthComponent"),
    ("AActor.DrowningComponent", ATHENA, "AthenaPlayerCharacter", "DrowningComponent"),
    ("AItemProxy.AItemInfo", ATHENA, "ItemProxy", "ItemInfo"),
    ("AItemInfo.UItemDesc", ATHENA, "ItemInfo", "Desc"),
    ("ABootyItemInfo.BootyType", ATHENA, "BootyItemInfo", "BootyType"),
    ("ABootyItemInfo.Rarity", ATHENA, "BootyItemInfo", "Rarity"),
    ("AShip.CrewOwnershipComponent", ATHENA, "Ship", "CrewOwnershipComponent"),
    ("AShip.ShipInternalWaterComponent", ATHENA, "Ship", "ShipInternalWaterComponent"),
    ("AShip.ShipOwningActor", ATHENA, "HullDamage", "Root"),
    ("UCrewOwnershipComponent.CrewId", ATHENA, "CrewOwnershipComponent", "CachedCrewId"),
    ("ACrewService.Crews", ATHENA, "CrewService", "Crews"),
    ("AFauna.Name", ATHENA_AI, "Fauna", "DisplayName"),
    ("AMapTable.MapPins", ATHENA, "MapTable", "MapPins"),
    ("AMapTable.ServerCenter", ATHENA, "MapTable", "ServerCentreLocation"),
    ("AMapTable.TrackedShips", ATHENA, "MapTable", "TrackedShips"),
    ("UWieldedItemComponent.WieldedItem", ATHENA, "WieldedItemComponent", "WieldedItem"),
    ("AWieldableItem.ItemInfo", ATHENA, "WieldableItem", "ItemInfo"),
    ("ACannon.TimePerFire", ATHENA, "Cannon", "TimePerFire"),
    ("ACannon.ProjectileSpeed", ATHENA, "Cannon", "ProjectileSpeed"),
    ("ACannon.ProjectileGravityScale", ATHENA, "Cannon", "ProjectileGravityScale"),
    ("ACannon.ServerPitch", ATHENA, "Cannon", "ServerPitch"),
];

impl OffsetConfig {
    /// The stock label table, reading `SDKs/JSON-SDK/*.json` and writing
    /// `offsets.json` relative to the working directory
    pub fn builtin() -> Self {
        let mut config = OffsetConfig {
            sdk_dir: PathBuf::from(DEFAULT_SDK_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            ..OffsetConfig::default()
        };

        for &(alias, file) in DOCUMENTS {
            config.documents.insert(alias.to_string(), PathBuf::from(file));
        }
        for &(label, value) in LITERALS {
            config
                .entries
                .insert(label.to_string(), LookupSpec::Literal { value });
        }
        for &(label, document, owner) in SIZES {
            config
                .entries
                .insert(label.to_string(), LookupSpec::size(document, owner));
        }
        for &(label, document, owner, field) in OFFSETS {
            config
                .entries
                .insert(label.to_string(), LookupSpec::offset(document, owner, field));
        }

        config
    }
}
