// Modèles de données
//   - status : réponse {ok, msg, time} renvoyée à chaque requête

pub mod status;
